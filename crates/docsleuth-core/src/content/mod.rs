/// Spreadsheet content — loading, grid model, and row sampling.
pub mod loader;
pub mod sample;
pub mod table;

pub use loader::{ExcelLoader, FileContent, LoadError, TableLoader};
pub use sample::{sample_rows, RowLimit};
pub use table::{Cell, Table};
