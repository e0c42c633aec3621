/// DocSleuth Core — classification, naming, and catalog model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`catalog`] — Ordered rule catalog with JSON persistence.
/// - [`model`] — Per-file classification records and filename helpers.
/// - [`content`] — Spreadsheet loading and row sampling.
/// - [`classify`] — Two-phase filename/content classifier.
/// - [`naming`] — Canonical estimate-name synthesis.
/// - [`resolve`] — Post-classification sibling reconciliation.
/// - [`scanner`] — Background directory classification with progress reporting.
pub mod catalog;
pub mod classify;
pub mod content;
pub mod model;
pub mod naming;
pub mod resolve;
pub mod scanner;
