/// Per-file classification result.
///
/// One record is produced for every file the scanner visits, keyed by its
/// full path. Records start out fully unknown and are filled in by the
/// classifier, the name synthesizer, and finally the sibling resolver.
use compact_str::CompactString;
use std::path::PathBuf;

/// Display form for fields that could not be determined.
pub const UNKNOWN_LABEL: &str = "?";

/// Spreadsheet extensions eligible for content matching and name synthesis.
///
/// Extensions are compared lowercase and without the leading dot.
#[inline]
pub fn is_spreadsheet_ext(ext: &str) -> bool {
    matches!(ext, "xls" | "xlsx")
}

/// `true` for Office lock-marker files (`~$Report.xlsx` and friends).
///
/// Lock markers are walked and name-matched like any other file, but their
/// content is never loaded — the bytes on disk are not a real workbook.
#[inline]
pub fn is_lock_marker(name: &str) -> bool {
    name.starts_with("~$")
}

/// The classification outcome for a single file.
///
/// `matched_type` holds the catalog rule id; `type_name` its display name.
/// All four outcome fields are `None` until something determines them, and
/// render as [`UNKNOWN_LABEL`] in user-facing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    /// File name including extension (NOT the full path).
    pub source_name: CompactString,

    /// Lowercased extension without the leading dot; empty when absent.
    pub extension: CompactString,

    /// Absolute path — the record key. Two files with equal names in
    /// different directories are distinct records.
    pub path: PathBuf,

    /// Id of the matched catalog rule, e.g. `"1"` or `"7.1"`.
    pub matched_type: Option<String>,

    /// Display name of the matched rule, e.g. `"Локальная смета"`.
    pub type_name: Option<String>,

    /// Rename mask copied from the matched rule.
    pub mask: Option<String>,

    /// Synthesized canonical name, without extension.
    pub canonical_base_name: Option<String>,
}

impl ClassificationRecord {
    /// Create a record with no classification yet.
    pub fn unmatched(source_name: CompactString, extension: CompactString, path: PathBuf) -> Self {
        Self {
            source_name,
            extension,
            path,
            matched_type: None,
            type_name: None,
            mask: None,
            canonical_base_name: None,
        }
    }

    /// `true` once the classifier (or the resolver) assigned a type.
    #[inline]
    pub fn is_recognised(&self) -> bool {
        self.matched_type.is_some()
    }

    /// Canonical name with the original extension re-attached, for display.
    pub fn proposed_full_name(&self) -> Option<String> {
        let base = self.canonical_base_name.as_ref()?;
        if self.extension.is_empty() {
            Some(base.clone())
        } else {
            Some(format!("{base}.{}", self.extension))
        }
    }

    /// Render an optional field, falling back to [`UNKNOWN_LABEL`].
    #[inline]
    pub fn display_or_unknown(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or(UNKNOWN_LABEL)
    }
}
