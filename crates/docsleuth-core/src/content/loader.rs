/// Spreadsheet loading via `calamine`, behind the [`TableLoader`] seam.
///
/// A load failure is an ordinary value here: the classifier turns it into
/// "no content match" and the scanner logs it, but nothing above this layer
/// ever sees a panic or a propagated error for an unreadable workbook.
use super::table::{Cell, Table};
use crate::model::is_lock_marker;
use calamine::{open_workbook, Data, Reader, Xls, Xlsx};
use once_cell::unsync::OnceCell;
use std::path::Path;
use thiserror::Error;

/// Why a workbook could not be read.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The extension is not one of the supported spreadsheet formats.
    #[error("unsupported extension {0:?}")]
    UnsupportedExtension(String),

    /// The workbook opened but contains no sheets at all.
    #[error("workbook has no sheets")]
    NoSheets,

    #[error(transparent)]
    Workbook(#[from] calamine::Error),
}

/// Source of loaded tables.
///
/// `Send + Sync` because one loader is shared across the per-file
/// classification tasks.
pub trait TableLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Table, LoadError>;
}

/// The standard loader: `.xlsx` through calamine's `Xlsx` reader, `.xls`
/// through `Xls`. Only the first worksheet is read — estimate headers
/// always live there.
pub struct ExcelLoader;

impl TableLoader for ExcelLoader {
    fn load(&self, path: &Path) -> Result<Table, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => {
                let mut workbook: Xlsx<_> = open_workbook(path).map_err(calamine::Error::from)?;
                first_sheet_table(workbook.worksheet_range_at(0))
            }
            "xls" => {
                let mut workbook: Xls<_> = open_workbook(path).map_err(calamine::Error::from)?;
                first_sheet_table(workbook.worksheet_range_at(0))
            }
            other => Err(LoadError::UnsupportedExtension(other.to_string())),
        }
    }
}

fn first_sheet_table<E>(range: Option<Result<calamine::Range<Data>, E>>) -> Result<Table, LoadError>
where
    calamine::Error: From<E>,
{
    let range = range.ok_or(LoadError::NoSheets)?.map_err(calamine::Error::from)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();
    Ok(Table::new(rows))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Date serials render like any other number; ISO forms keep their text.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        // Formula errors behave like blanks, as they do in every viewer.
        Data::Error(_) => Cell::Empty,
    }
}

/// Lazily-loaded content for one file under classification.
///
/// The content phase and the name synthesizer both want the same table;
/// this wrapper loads it at most once and hands out `None` on failure so
/// both callers degrade the same way. Lock-marker files are never loaded
/// at all.
pub struct FileContent<'a> {
    loader: &'a dyn TableLoader,
    path: &'a Path,
    lock_marker: bool,
    cached: OnceCell<Result<Table, LoadError>>,
}

impl<'a> FileContent<'a> {
    pub fn new(loader: &'a dyn TableLoader, path: &'a Path, file_name: &str) -> Self {
        Self {
            loader,
            path,
            lock_marker: is_lock_marker(file_name),
            cached: OnceCell::new(),
        }
    }

    /// The loaded table. `None` for lock markers and failed loads.
    pub fn table(&self) -> Option<&Table> {
        if self.lock_marker {
            return None;
        }
        self.cached
            .get_or_init(|| self.loader.load(self.path))
            .as_ref()
            .ok()
    }

    /// The load failure, when a load was attempted and failed.
    /// Lock markers never attempt a load, so they report no error.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.cached.get().and_then(|result| result.as_ref().err())
    }
}
