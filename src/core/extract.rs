//! Extraction of the account archive into the normalized `id,text` table

use crate::adapters::archive::{CsvSink, RecordReader, SourceFormat, RECORD_HEADER};
use crate::config::AuditConfig;
use crate::domain::Result;
use std::path::Path;

/// Reads the archive JSON named in `config.paths.archive` and writes a fresh
/// `config.paths.transformed` CSV
///
/// Returns the number of records written.
pub fn extract_records(config: &AuditConfig) -> Result<usize> {
    let reader = RecordReader::new(&config.paths.archive, SourceFormat::ArchiveJson);
    extract(&reader, &config.paths.transformed)
}

/// Copies every record from `reader` into a truncated CSV at `destination`
///
/// The header is written even when the source holds no records.
pub fn extract(reader: &RecordReader, destination: &Path) -> Result<usize> {
    let records = reader.load()?;

    let mut sink = CsvSink::open(destination, &RECORD_HEADER, false)?;
    let count = sink.write_header_and_rows(
        records
            .iter()
            .map(|record| [record.id.as_str(), record.text.as_str()]),
    )?;
    sink.close()?;

    tracing::info!(
        source = %reader.path().display(),
        destination = %destination.display(),
        count,
        "Extracted records"
    );
    Ok(count)
}
