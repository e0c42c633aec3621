/// Post-classification sibling reconciliation.
///
/// A logical document often exists as several same-stem files in one
/// directory: the estimate workbook plus an exported PDF or a scanned
/// signature sheet. Only the spreadsheet carries classifiable content,
/// so after per-file classification the spreadsheet's verdict is copied
/// onto its still-unknown siblings.
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::model::{is_spreadsheet_ext, ClassificationRecord};

/// Propagates each group's spreadsheet classification to its unknown
/// same-stem siblings, in place.
///
/// Groups are scoped to one directory: `01/смета.xlsx` and
/// `02/смета.pdf` are unrelated. The donor is the last record (in
/// sequence order) with a spreadsheet extension and a synthesized
/// canonical name; when several spreadsheets qualify, the later one
/// wins. Records that already carry their own classification are never
/// overwritten.
pub fn propagate_to_siblings(records: &mut [ClassificationRecord]) {
    let mut groups: HashMap<(PathBuf, OsString), Vec<usize>> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let parent = record.path.parent().map(PathBuf::from).unwrap_or_default();
        let Some(stem) = record.path.file_stem() else {
            continue;
        };
        groups
            .entry((parent, stem.to_os_string()))
            .or_default()
            .push(index);
    }

    for indices in groups.values() {
        let donor = indices.iter().rev().copied().find(|&i| {
            let record = &records[i];
            is_spreadsheet_ext(&record.extension) && record.canonical_base_name.is_some()
        });
        let Some(donor) = donor else {
            continue;
        };

        let matched_type = records[donor].matched_type.clone();
        let type_name = records[donor].type_name.clone();
        let mask = records[donor].mask.clone();
        let canonical = records[donor].canonical_base_name.clone();

        for &i in indices {
            if i == donor || records[i].is_recognised() {
                continue;
            }
            let record = &mut records[i];
            record.matched_type = matched_type.clone();
            record.type_name = type_name.clone();
            record.mask = mask.clone();
            record.canonical_base_name = canonical.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compact_str::CompactString;

    fn record(path: &str) -> ClassificationRecord {
        let path = PathBuf::from(path);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        ClassificationRecord::unmatched(
            CompactString::new(&name),
            CompactString::new(&ext),
            path,
        )
    }

    fn classified(path: &str, id: &str, name: &str, mask: &str, canonical: &str) -> ClassificationRecord {
        let mut rec = record(path);
        rec.matched_type = Some(id.to_string());
        rec.type_name = Some(name.to_string());
        rec.mask = Some(mask.to_string());
        rec.canonical_base_name = Some(canonical.to_string());
        rec
    }

    #[test]
    fn spreadsheet_verdict_reaches_unknown_siblings() {
        let mut records = vec![
            classified(
                "/docs/a.xlsx",
                "1",
                "Локальная смета",
                "ЛС-ГС",
                "ЛС-01-01-БАЗ-(ex. a.xlsx..)",
            ),
            record("/docs/a.pdf"),
        ];
        propagate_to_siblings(&mut records);

        let pdf = &records[1];
        assert_eq!(pdf.matched_type.as_deref(), Some("1"));
        assert_eq!(pdf.type_name.as_deref(), Some("Локальная смета"));
        assert_eq!(pdf.mask.as_deref(), Some("ЛС-ГС"));
        assert_eq!(
            pdf.canonical_base_name.as_deref(),
            Some("ЛС-01-01-БАЗ-(ex. a.xlsx..)")
        );
    }

    /// A sibling with its own classification keeps it.
    #[test]
    fn recognised_siblings_are_never_overwritten() {
        let mut records = vec![
            classified(
                "/docs/a.xlsx",
                "1",
                "Локальная смета",
                "ЛС-ГС",
                "ЛС-01-01-БАЗ-(ex. a.xlsx..)",
            ),
            record("/docs/a.pdf"),
        ];
        records.push({
            let mut own = record("/docs/a.docx");
            own.matched_type = Some("4".to_string());
            own.type_name = Some("Пояснительная записка".to_string());
            own
        });
        propagate_to_siblings(&mut records);

        assert_eq!(records[1].matched_type.as_deref(), Some("1"));
        assert_eq!(records[2].matched_type.as_deref(), Some("4"));
        assert_eq!(records[2].canonical_base_name, None);
    }

    /// Two classified spreadsheets in the same group: the later record
    /// donates.
    #[test]
    fn later_spreadsheet_wins_the_tie_break() {
        let mut records = vec![
            classified("/docs/a.xls", "1", "Локальная смета", "ЛС-ГС", "ЛС-01-01-БАЗ-(ex. a.xls..)"),
            classified("/docs/a.xlsx", "2", "Объектная смета", "ОС-ГС", "ОС-02-БАЗ-(ex. a.xlsx..)"),
            record("/docs/a.pdf"),
        ];
        propagate_to_siblings(&mut records);

        assert_eq!(records[2].matched_type.as_deref(), Some("2"));
        assert_eq!(
            records[2].canonical_base_name.as_deref(),
            Some("ОС-02-БАЗ-(ex. a.xlsx..)")
        );
        // The earlier spreadsheet keeps its own verdict.
        assert_eq!(records[0].matched_type.as_deref(), Some("1"));
    }

    /// Same stem in different directories is two unrelated groups.
    #[test]
    fn groups_are_scoped_to_one_directory() {
        let mut records = vec![
            classified(
                "/docs/01/смета.xlsx",
                "1",
                "Локальная смета",
                "ЛС-ГС",
                "ЛС-01-01-БАЗ-(ex. смета.xls..)",
            ),
            record("/docs/02/смета.pdf"),
        ];
        propagate_to_siblings(&mut records);
        assert_eq!(records[1].matched_type, None);
    }

    /// A matched spreadsheet without a synthesized name has nothing to
    /// donate.
    #[test]
    fn spreadsheet_without_canonical_name_does_not_donate() {
        let mut records = vec![record("/docs/a.xlsx"), record("/docs/a.pdf")];
        records[0].matched_type = Some("4".to_string());
        records[0].type_name = Some("Пояснительная записка".to_string());
        propagate_to_siblings(&mut records);
        assert_eq!(records[1].matched_type, None);
    }
}
