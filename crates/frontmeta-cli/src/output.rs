//! Printing scan results.
//!
//! JSON output is one object per document:
//!
//! ```json
//! {"path": "notes/sync.md", "metadata": {"title": "Weekly Sync", ...}}
//! {"path": "notes/bad.md", "error": "Decode error: ..."}
//! ```
//!
//! Several documents are printed as a JSON array of those objects. Text output
//! prints the path followed by one indented `name: value` line per attribute.

use std::io::Write;
use std::path::PathBuf;

use frontmeta_core::{Attribute, AttributeValue, MetadataRecord};
use serde_json::{Map, Value, json};

use crate::cli::ScanArgs;
use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;

/// Label used for documents read from standard input.
pub const STDIN_LABEL: &str = "-";

/// Output settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON.
    pub pretty: bool,
    /// Key attributes by indexer names.
    pub external_keys: bool,
    /// Include the full document text.
    pub include_full_text: bool,
}

impl OutputOptions {
    /// Command-line flags take precedence over the config file.
    pub fn resolve(config: &OutputConfig, args: &ScanArgs) -> Self {
        Self {
            format: args.format.unwrap_or(config.format),
            pretty: config.pretty || args.pretty,
            external_keys: config.external_keys || args.external_keys,
            include_full_text: config.include_full_text && !args.no_full_text,
        }
    }

    fn key(&self, attribute: Attribute) -> &'static str {
        if self.external_keys {
            attribute.external_key()
        } else {
            attribute.name()
        }
    }

    fn shows(&self, attribute: Attribute) -> bool {
        self.include_full_text || attribute != Attribute::FullText
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::resolve(&OutputConfig::default(), &ScanArgs::default())
    }
}

/// The outcome of scanning one document.
#[derive(Debug)]
pub struct DocumentReport {
    /// File path, or `-` for standard input.
    pub source: PathBuf,
    /// The record, or the message of the error that prevented scanning.
    pub outcome: std::result::Result<MetadataRecord, String>,
}

impl DocumentReport {
    /// A successful scan.
    pub fn scanned(source: impl Into<PathBuf>, record: MetadataRecord) -> Self {
        Self {
            source: source.into(),
            outcome: Ok(record),
        }
    }

    /// A document that could not be scanned.
    pub fn failed(source: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self {
            source: source.into(),
            outcome: Err(error.to_string()),
        }
    }

    /// True if the document was scanned.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Convert a record into a JSON object keyed per `options`.
pub fn record_to_json(record: &MetadataRecord, options: &OutputOptions) -> Result<Value> {
    let mut map = Map::new();
    for (attribute, value) in record.iter() {
        if options.shows(attribute) {
            map.insert(
                options.key(attribute).to_string(),
                serde_json::to_value(value)?,
            );
        }
    }
    Ok(Value::Object(map))
}

fn report_to_json(report: &DocumentReport, options: &OutputOptions) -> Result<Value> {
    let path = report.source.display().to_string();
    Ok(match &report.outcome {
        Ok(record) => json!({ "path": path, "metadata": record_to_json(record, options)? }),
        Err(message) => json!({ "path": path, "error": message }),
    })
}

/// Write all reports in the chosen format.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[DocumentReport],
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => write_json(out, reports, options),
        OutputFormat::Text => write_text(out, reports, options),
    }
}

fn write_json<W: Write>(
    out: &mut W,
    reports: &[DocumentReport],
    options: &OutputOptions,
) -> Result<()> {
    let value = match reports {
        [single] => report_to_json(single, options)?,
        _ => Value::Array(
            reports
                .iter()
                .map(|report| report_to_json(report, options))
                .collect::<Result<_>>()?,
        ),
    };

    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    } else {
        serde_json::to_writer(&mut *out, &value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(
    out: &mut W,
    reports: &[DocumentReport],
    options: &OutputOptions,
) -> Result<()> {
    for report in reports {
        writeln!(out, "{}", report.source.display())?;
        match &report.outcome {
            Ok(record) => {
                for (attribute, value) in record.iter() {
                    if options.shows(attribute) {
                        writeln!(
                            out,
                            "  {}: {}",
                            options.key(attribute),
                            text_value(attribute, value)
                        )?;
                    }
                }
            }
            Err(message) => writeln!(out, "  error: {message}")?,
        }
    }
    Ok(())
}

/// Full text is summarized as a byte count.
fn text_value(attribute: Attribute, value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(text) if attribute == Attribute::FullText => {
            format!("<{} bytes>", text.len())
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
