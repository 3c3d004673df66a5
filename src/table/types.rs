use std::fmt;

/// A single cell value, covering the types the source formats produce.
///
/// Database NULLs and empty workbook cells both map to `Null`. Values whose
/// source type falls outside these families are rendered to `Text` by the
/// reader where a faithful rendering exists, and degrade to `Null` where it
/// does not.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value; renders as an empty field.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Int(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

/// An ordered tabular data set held entirely in memory between one bulk
/// read and one bulk write.
///
/// Column order and row order are the source's order; no reader or writer
/// in this crate filters, renames, or reorders them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    /// Column names, in source order.
    pub columns: Vec<String>,
    /// Data rows, each holding one cell per column, in source order.
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Creates a table from its column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        DataTable { columns, rows }
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that cell values render the way the CSV writer needs them.
    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Text("Widget".to_string()).to_string(), "Widget");
    }

    /// Tests that whole floats drop the trailing fraction when rendered.
    #[test]
    fn test_float_display_shortest_form() {
        assert_eq!(CellValue::Float(5.0).to_string(), "5");
        assert_eq!(CellValue::Float(9.99).to_string(), "9.99");
        assert_eq!(CellValue::Float(-0.5).to_string(), "-0.5");
    }

    /// Tests the row and column counters.
    #[test]
    fn test_data_table_counts() {
        let table = DataTable::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![CellValue::Int(1), CellValue::Text("Widget".to_string())],
                vec![CellValue::Int(2), CellValue::Text("Gadget".to_string())],
            ],
        );

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(!table.is_empty());
    }

    /// Tests that a default table is empty but still usable.
    #[test]
    fn test_data_table_default_is_empty() {
        let table = DataTable::default();

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }
}
