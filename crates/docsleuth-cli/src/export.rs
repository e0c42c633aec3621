/// CSV export of scan results.
use anyhow::Context;
use chrono::NaiveDate;
use docsleuth_core::model::{ClassificationRecord, UNKNOWN_LABEL};
use std::path::{Path, PathBuf};

/// Export file name for a run on `date`: `docsleuth_scan_YYYYMMDD.csv`.
pub fn default_export_name(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("docsleuth_scan_{}.csv", date.format("%Y%m%d")))
}

/// Write records to `path` as CSV with a fixed header row.
pub fn write_csv(path: &Path, records: &[&ClassificationRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["file", "type", "mask", "proposed_name", "path"])?;

    for record in records {
        let proposed = record
            .proposed_full_name()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
        let path_text = record.path.to_string_lossy();
        writer.write_record([
            record.source_name.as_str(),
            ClassificationRecord::display_or_unknown(&record.type_name),
            ClassificationRecord::display_or_unknown(&record.mask),
            proposed.as_str(),
            path_text.as_ref(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
