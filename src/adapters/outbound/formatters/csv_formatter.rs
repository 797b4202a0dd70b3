use crate::ports::outbound::RecordFormatter;
use crate::sbom_flattening::domain::{ComponentRecord, COLUMNS};
use crate::shared::Result;

/// CsvFormatter adapter producing the component table as CSV
///
/// The first column is an unnamed 0-based row index, followed by the record
/// columns in [`COLUMNS`] order. Null cells are written empty.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
        let line = cells.into_iter().map(escape_csv).collect::<Vec<_>>().join(",");
        out.push_str(&line);
        out.push('\n');
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for CsvFormatter {
    fn format(&self, records: &[ComponentRecord]) -> Result<String> {
        let mut content = String::new();
        Self::write_row(&mut content, std::iter::once("").chain(COLUMNS));

        for (index, record) in records.iter().enumerate() {
            let index = index.to_string();
            let cells = record.cells().map(|c| c.unwrap_or_default());
            Self::write_row(&mut content, std::iter::once(index.as_str()).chain(cells));
        }

        Ok(content)
    }
}

/// Quotes a cell when it contains a delimiter, quote or line break
fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
