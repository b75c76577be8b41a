//! Handler for `frontmeta scan`.

use std::io::{Read, Write};
use std::path::Path;

use frontmeta_content::Scanner;
use frontmeta_core::MetadataRecord;

use crate::cli::ScanArgs;
use crate::config::CliConfig;
use crate::error::Result;
use crate::output::{DocumentReport, OutputOptions, STDIN_LABEL, write_reports};

/// Scan every requested document and write the reports to `out`.
///
/// A document that cannot be read or decoded is reported and the rest are
/// still scanned. Errors that are not about one document abort the run.
/// Returns `true` only if every document was scanned.
pub fn cmd_scan<R: Read, W: Write>(
    args: &ScanArgs,
    config: &CliConfig,
    mut stdin: R,
    out: &mut W,
) -> Result<bool> {
    let options = OutputOptions::resolve(&config.output, args);
    let scanner = Scanner::new();

    let reports = if args.reads_stdin() {
        vec![scan_reader(&scanner, &mut stdin)?]
    } else {
        args.files
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_LABEL {
                    scan_reader(&scanner, &mut stdin)
                } else {
                    scan_path(&scanner, path)
                }
            })
            .collect::<Result<Vec<_>>>()?
    };

    let all_ok = reports.iter().all(DocumentReport::is_ok);
    log::info!(
        "Scanned {} document(s), {} failed",
        reports.len(),
        reports.iter().filter(|r| !r.is_ok()).count()
    );

    write_reports(out, &reports, &options)?;
    Ok(all_ok)
}

fn scan_path(scanner: &Scanner, path: &Path) -> Result<DocumentReport> {
    log::debug!("Scanning {}", path.display());
    report(path, scanner.scan_file(path))
}

fn scan_reader<R: Read>(scanner: &Scanner, reader: &mut R) -> Result<DocumentReport> {
    let mut bytes = Vec::new();
    if let Err(e) = reader.read_to_end(&mut bytes) {
        log::warn!("Failed to read standard input: {e}");
        return Ok(DocumentReport::failed(STDIN_LABEL, e));
    }
    let scanned = scanner.scan_bytes(&bytes).inspect_err(|e| {
        log::warn!("No metadata for standard input: {e}");
    });
    report(STDIN_LABEL, scanned)
}

/// Turn a per-document failure into a report; pass other errors up.
fn report(
    source: impl AsRef<Path>,
    scanned: frontmeta_core::Result<MetadataRecord>,
) -> Result<DocumentReport> {
    let source = source.as_ref();
    match scanned {
        Ok(record) => Ok(DocumentReport::scanned(source, record)),
        Err(e) if e.is_document_error() => Ok(DocumentReport::failed(source, e)),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Tests
// ============================================================================
