//! Natural-language date detection.
//!
//! The normalizer only needs one capability: given a string, find the first
//! date mentioned in it. That capability is the [`DateDetector`] trait, so a
//! host can swap in its own detector (or a closure) without touching the
//! normalizer.
//!
//! [`NaturalDateDetector`] is the built-in, regex-backed implementation. It
//! recognizes:
//!
//! - ISO dates: `2020-03-03`, `2020-03-03T10:30`, `2020-03-03 10:30:15`
//! - Year-first slashes: `2020/03/03`
//! - US numeric dates (month first): `3/3/2020`
//! - Month-name dates: `March 3 2020`, `Mar 3, 2020`, `March 3rd, 2020`, `March 3`
//! - Day-first dates: `3 March 2020`, `3rd of March 2020`
//! - Relative words: `today`, `tomorrow`, `yesterday`
//!
//! Textual and relative dates may carry a time (`at 10:30`, `10:30 pm`).
//! Dates without a time resolve to midnight UTC; dates without a year use
//! the reference year.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use frontmeta_content::date::{DateDetector, NaturalDateDetector};
//!
//! let detector = NaturalDateDetector::new();
//! let found = detector.find_first_date("Sync on March 3 2020, then again later");
//! assert_eq!(found, Some(Utc.with_ymd_and_hms(2020, 3, 3, 0, 0, 0).unwrap()));
//!
//! assert_eq!(detector.find_first_date("asdf"), None);
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use regex::{Captures, Regex};

/// Finds the first date mentioned in a piece of text.
pub trait DateDetector: Send + Sync {
    /// Return the resolved date-time of the first date in `text`, if any.
    fn find_first_date(&self, text: &str) -> Option<DateTime<Utc>>;
}

impl<F> DateDetector for F
where
    F: Fn(&str) -> Option<DateTime<Utc>> + Send + Sync,
{
    fn find_first_date(&self, text: &str) -> Option<DateTime<Utc>> {
        self(text)
    }
}

// ============================================================================
// Patterns
// ============================================================================

const MONTH_NAME: &str = r"(?P<month>jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

const ORDINAL: &str = r"(?:st|nd|rd|th)?";

const TIME_SUFFIX: &str = r"(?:,?\s+(?:at\s+)?(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\s*(?P<meridiem>[ap])\.?m\b\.?)?)?";

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2020-03-03, 2020-03-03T10:30:00
        r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})(?:[T ](?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?)?"
            .to_string(),
        // 2020/03/03
        r"\b(?P<year>\d{4})/(?P<month>\d{1,2})/(?P<day>\d{1,2})\b".to_string(),
        // 3/3/2020
        r"\b(?P<month>\d{1,2})/(?P<day>\d{1,2})/(?P<year>\d{4})\b".to_string(),
        // March 3 2020, Mar 3, 2020, March 3rd, 2020
        format!(
            r"\b{MONTH_NAME}\s+(?P<day>\d{{1,2}}){ORDINAL}(?:,\s*|\s+)(?P<year>\d{{4}})\b{TIME_SUFFIX}"
        ),
        // March 3, March 3rd
        format!(r"\b{MONTH_NAME}\s+(?P<day>\d{{1,2}}){ORDINAL}\b{TIME_SUFFIX}"),
        // 3 March 2020, 3rd of March 2020
        format!(
            r"\b(?P<day>\d{{1,2}}){ORDINAL}\s+(?:of\s+)?{MONTH_NAME},?\s+(?P<year>\d{{4}})\b{TIME_SUFFIX}"
        ),
        // today, tomorrow at 10:00
        format!(r"\b(?P<relative>today|tomorrow|yesterday)\b{TIME_SUFFIX}"),
    ]
    .iter()
    .map(|pattern| {
        Regex::new(&format!("(?i){pattern}")).expect("date pattern is a valid regex")
    })
    .collect()
});

// ============================================================================
// NaturalDateDetector
// ============================================================================

/// A date found in text, with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte range of the matched text.
    pub range: Range<usize>,
    /// Resolved date-time.
    pub date: DateTime<Utc>,
}

/// Regex-backed detector for common English date expressions.
///
/// Relative words and year-less dates are resolved against a reference
/// instant: the current time unless one is fixed with
/// [`with_reference`](Self::with_reference).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalDateDetector {
    reference: Option<DateTime<Utc>>,
}

impl NaturalDateDetector {
    /// Create a detector that resolves relative dates against the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector that resolves relative dates against `reference`.
    pub fn with_reference(reference: DateTime<Utc>) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    /// Find the leftmost date in `text`.
    ///
    /// When several expressions start at the same position the longest one
    /// wins, so `March 3 2020` is preferred over `March 3`. Impossible
    /// dates such as `February 30 2020` are skipped.
    pub fn find_first_match(&self, text: &str) -> Option<DateMatch> {
        let reference = self.reference.unwrap_or_else(Utc::now);

        DATE_PATTERNS
            .iter()
            .filter_map(|pattern| {
                pattern.captures_iter(text).find_map(|caps| {
                    let whole = caps.get(0)?;
                    let date = resolve(&caps, reference)?;
                    Some(DateMatch {
                        range: whole.range(),
                        date,
                    })
                })
            })
            .min_by(|a, b| {
                a.range
                    .start
                    .cmp(&b.range.start)
                    .then(b.range.end.cmp(&a.range.end))
            })
    }
}

impl DateDetector for NaturalDateDetector {
    fn find_first_date(&self, text: &str) -> Option<DateTime<Utc>> {
        let found = self.find_first_match(text);
        if let Some(found) = &found {
            log::debug!("Date '{}' resolved to {}", &text[found.range.clone()], found.date);
        }
        found.map(|found| found.date)
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn resolve(caps: &Captures<'_>, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let date = match caps.name("relative") {
        Some(word) => resolve_relative(word.as_str(), reference)?,
        None => {
            let year = match caps.name("year") {
                Some(year) => year.as_str().parse().ok()?,
                None => reference.year(),
            };
            let month = parse_month(caps.name("month")?.as_str())?;
            let day = caps.name("day")?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)?
        }
    };

    let time = resolve_time(caps).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time).and_utc())
}

fn resolve_relative(word: &str, reference: DateTime<Utc>) -> Option<NaiveDate> {
    let today = reference.date_naive();
    match word.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => None,
    }
}

/// Month from a number (`3`, `03`) or an English name (`Mar`, `march`, `Sept`).
fn parse_month(text: &str) -> Option<u32> {
    if let Ok(number) = text.parse::<u32>() {
        return (1..=12).contains(&number).then_some(number);
    }

    let prefix: String = text.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Time of day from the optional `hour`/`minute`/`second`/`meridiem` groups.
///
/// An out-of-range time is ignored rather than rejecting the date.
fn resolve_time(caps: &Captures<'_>) -> Option<NaiveTime> {
    let mut hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
    let minute: u32 = caps.name("minute")?.as_str().parse().ok()?;
    let second: u32 = match caps.name("second") {
        Some(second) => second.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = caps.name("meridiem") {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("p");
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        at(y, m, d, 0, 0, 0)
    }

    fn detector() -> NaturalDateDetector {
        NaturalDateDetector::with_reference(at(2024, 6, 15, 9, 0, 0))
    }

    fn detect(text: &str) -> Option<DateTime<Utc>> {
        detector().find_first_date(text)
    }

    // ------------------------------------------------------------------------
    // Numeric formats
    // ------------------------------------------------------------------------

    #[test]
    fn test_iso_date() {
        assert_eq!(detect("2020-03-03"), Some(day(2020, 3, 3)));
    }

    #[test]
    fn test_iso_date_time() {
        assert_eq!(detect("2020-03-03T10:30"), Some(at(2020, 3, 3, 10, 30, 0)));
        assert_eq!(detect("2020-03-03 10:30:15"), Some(at(2020, 3, 3, 10, 30, 15)));
        assert_eq!(detect("2020-03-03T10:30:00Z"), Some(at(2020, 3, 3, 10, 30, 0)));
    }

    #[test]
    fn test_year_first_slashes() {
        assert_eq!(detect("due 2021/12/01"), Some(day(2021, 12, 1)));
    }

    #[test]
    fn test_us_numeric_date() {
        assert_eq!(detect("3/4/2020"), Some(day(2020, 3, 4)));
    }

    #[test]
    fn test_invalid_numeric_dates_rejected() {
        assert_eq!(detect("2020-13-01"), None);
        assert_eq!(detect("2021-02-29"), None);
        assert_eq!(detect("13/13/2020"), None);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(detect("2020-02-29"), Some(day(2020, 2, 29)));
    }

    // ------------------------------------------------------------------------
    // Month-name formats
    // ------------------------------------------------------------------------

    #[test]
    fn test_month_day_year() {
        assert_eq!(detect("March 3 2020"), Some(day(2020, 3, 3)));
        assert_eq!(detect("Mar 3, 2020"), Some(day(2020, 3, 3)));
        assert_eq!(detect("march 3rd, 2020"), Some(day(2020, 3, 3)));
        assert_eq!(detect("Sept. 21 2019"), Some(day(2019, 9, 21)));
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(detect("3 March 2020"), Some(day(2020, 3, 3)));
        assert_eq!(detect("21st of December, 2012"), Some(day(2012, 12, 21)));
    }

    #[test]
    fn test_month_day_without_year_uses_reference_year() {
        assert_eq!(detect("July 4"), Some(day(2024, 7, 4)));
    }

    #[test]
    fn test_textual_date_with_time() {
        assert_eq!(
            detect("March 3 2020 at 10:30 pm"),
            Some(at(2020, 3, 3, 22, 30, 0))
        );
        assert_eq!(detect("Mar 3, 2020, 9:05"), Some(at(2020, 3, 3, 9, 5, 0)));
        assert_eq!(detect("3 March 2020 12:15 am"), Some(at(2020, 3, 3, 0, 15, 0)));
    }

    #[test]
    fn test_impossible_time_keeps_date() {
        assert_eq!(detect("March 3 2020 at 25:00"), Some(day(2020, 3, 3)));
    }

    #[test]
    fn test_impossible_textual_date_rejected() {
        assert_eq!(detect("February 30 2020"), None);
    }

    // ------------------------------------------------------------------------
    // Relative words
    // ------------------------------------------------------------------------

    #[test]
    fn test_relative_words() {
        assert_eq!(detect("today"), Some(day(2024, 6, 15)));
        assert_eq!(detect("Tomorrow"), Some(day(2024, 6, 16)));
        assert_eq!(detect("yesterday"), Some(day(2024, 6, 14)));
        assert_eq!(detect("tomorrow at 14:00"), Some(at(2024, 6, 16, 14, 0, 0)));
    }

    #[test]
    fn test_relative_word_inside_another_word_ignored() {
        assert_eq!(detect("todays"), None);
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    #[test]
    fn test_leftmost_date_wins() {
        assert_eq!(
            detect("moved from 2020-05-01 to March 3 2020"),
            Some(day(2020, 5, 1))
        );
        assert_eq!(
            detect("moved from March 3 2020 to 2020-05-01"),
            Some(day(2020, 3, 3))
        );
    }

    #[test]
    fn test_longest_match_at_same_position_wins() {
        let found = detector().find_first_match("on March 3 2020.").unwrap();
        assert_eq!(found.range, 3..15);
        assert_eq!(found.date, day(2020, 3, 3));
    }

    #[test]
    fn test_invalid_first_candidate_falls_through() {
        assert_eq!(detect("2020-02-30 or 2020-03-01"), Some(day(2020, 3, 1)));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(detect("asdf"), None);
        assert_eq!(detect(""), None);
        assert_eq!(detect("room 101"), None);
    }

    // ------------------------------------------------------------------------
    // Helpers and trait objects
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("03"), Some(3));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("December"), Some(12));
        assert_eq!(parse_month("SEPT"), Some(9));
        assert_eq!(parse_month("smarch"), None);
    }

    #[test]
    fn test_closure_detector() {
        let fixed = day(1999, 12, 31);
        let detector = move |_: &str| Some(fixed);
        assert_eq!(detector.find_first_date("anything"), Some(fixed));
    }

    #[test]
    fn test_detector_as_trait_object() {
        let detector: Box<dyn DateDetector> = Box::new(detector());
        assert_eq!(detector.find_first_date("2020-03-03"), Some(day(2020, 3, 3)));
    }
}
