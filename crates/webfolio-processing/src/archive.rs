//! ZIP archive building for the converted batch.

use anyhow::{Context, Result};
use std::io::Write;

use webfolio_core::models::ConversionRecord;

/// Build one ZIP blob containing every record at its `folder/outputName`
/// path, preserving the uploaded folder hierarchy.
///
/// The input must already be in canonical order with collision-free paths
/// (see [`crate::ledger::order_records`]); entries are written in that order.
/// Deflate at maximum compression. The caller is expected to skip this step
/// entirely when there are no records.
pub fn build_zip_archive(records: &[ConversionRecord]) -> Result<Vec<u8>> {
    use zip::write::{FileOptions, ZipWriter};
    use zip::CompressionMethod;

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9))
            .unix_permissions(0o644);

        for record in records {
            let entry_path = record.archive_path();
            zip.start_file(&entry_path, options)
                .with_context(|| format!("Failed to add file to ZIP: {}", entry_path))?;
            zip.write_all(&record.data)
                .with_context(|| format!("Failed to write file data to ZIP: {}", entry_path))?;
        }

        zip.finish().context("Failed to finalize ZIP archive")?;
    }

    Ok(buffer)
}
