/// Scan-result table rendering via `comfy-table`.
///
/// Column sizing, Unicode width handling and borders are the table
/// crate's job; this module only decides what goes in the cells.
/// Unknown fields render as `?`, proposed names get the original
/// extension re-attached.
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use docsleuth_core::model::{ClassificationRecord, UNKNOWN_LABEL};

const HEADERS: [&str; 4] = ["File", "Type", "Mask", "Proposed name"];

/// Build the result table, one row per record.
pub fn results_table(records: &[&ClassificationRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = HEADERS
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for record in records {
        table.add_row(cells(record));
    }
    table
}

fn cells(record: &ClassificationRecord) -> Vec<String> {
    vec![
        record.source_name.to_string(),
        ClassificationRecord::display_or_unknown(&record.type_name).to_string(),
        ClassificationRecord::display_or_unknown(&record.mask).to_string(),
        record
            .proposed_full_name()
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
    ]
}
