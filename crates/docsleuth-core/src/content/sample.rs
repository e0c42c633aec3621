/// Row sampling — the single place where spreadsheet rows become the
/// lowercase strings the matching layers work on.
///
/// Both consumers sample through here with different ceilings: content-tag
/// scanning reads every row, estimate-number extraction reads only the
/// leading rows. The rendering is order-preserving and deterministic, so
/// classifying the same file twice always sees identical strings.
use super::table::Table;

/// How many leading rows to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLimit {
    /// Every row in the table.
    All,
    /// At most the first `n` rows (fewer when the table is shorter).
    First(usize),
}

/// Render the leading rows of `table` to lowercase strings.
///
/// Each row becomes the concatenation of its non-empty cell string forms,
/// with no separator, lowercased. Rows whose cells are all empty still
/// occupy a slot (as an empty string) so row indices — and the sampling
/// ceiling — always refer to physical rows.
pub fn sample_rows(table: &Table, limit: RowLimit) -> Vec<String> {
    let ceiling = match limit {
        RowLimit::All => table.row_count(),
        RowLimit::First(n) => n.min(table.row_count()),
    };

    table.rows()[..ceiling]
        .iter()
        .map(|cells| {
            let mut joined = String::new();
            for cell in cells {
                let rendered = cell.to_string();
                if !rendered.is_empty() {
                    joined.push_str(&rendered);
                }
            }
            joined.to_lowercase()
        })
        .collect()
}
