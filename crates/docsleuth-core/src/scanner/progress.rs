/// Classification progress reporting — lightweight messages sent from the
/// classification thread to the frontend via a crossbeam channel.

use std::time::Duration;

/// Progress updates sent from the classification thread.
///
/// The actual records live in the shared `LiveResults`; these messages
/// carry only lightweight counters and status flags.
#[derive(Debug)]
pub enum ClassifyProgress {
    /// Traversal finished; classification of the discovered files begins.
    Discovered { files_total: u64 },
    /// Periodic update with running totals.
    Update {
        files_processed: u64,
        files_matched: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. an unreadable workbook or an inaccessible
    /// directory).
    Error { path: String, message: String },
    /// Run completed; records are reconciled and final.
    Complete {
        duration: Duration,
        files_total: u64,
        files_matched: u64,
        error_count: u64,
    },
    /// Run was cancelled by the user.
    Cancelled,
}
