/// Data model for DocSleuth classification results.
///
/// Re-exports the per-file record type and filename helpers.
pub mod record;

pub use record::{is_lock_marker, is_spreadsheet_ext, ClassificationRecord, UNKNOWN_LABEL};
