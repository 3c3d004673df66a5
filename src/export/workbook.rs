use crate::table::{CellValue, DataTable};
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes a table to a single-worksheet Excel workbook.
///
/// Row 0 holds the column names as string cells; every data row follows with
/// typed cells (numbers as numbers, booleans as booleans, text as strings).
/// `Null` cells are left unwritten, which renders them empty. The workbook
/// is assembled in memory and saved in one step at the end, so a failure
/// while building it leaves no partial file on disk. An existing file at the
/// path is overwritten.
///
/// # Arguments
///
/// * `table` - The table to write.
/// * `path` - Destination path of the `.xlsx` file.
///
/// # Returns
///
/// * `Ok(())` - The workbook was saved.
/// * `Err(anyhow::Error)` - A cell write or the final save failed.
///
/// # Examples
///
/// ```rust,no_run
/// use bottleneck_exports::export::write_xlsx;
/// use bottleneck_exports::table::{CellValue, DataTable};
///
/// fn main() -> anyhow::Result<()> {
///     let table = DataTable::new(
///         vec!["id".to_string(), "name".to_string()],
///         vec![vec![CellValue::Int(1), CellValue::Text("Widget".to_string())]],
///     );
///     write_xlsx(&table, "/data/sales_report.xlsx")?;
///     Ok(())
/// }
/// ```
pub fn write_xlsx<P: AsRef<Path>>(table: &DataTable, path: P) -> AnyhowResult<()> {
  let path = path.as_ref();
  let mut workbook = Workbook::new();
  let worksheet = workbook.add_worksheet();

  for (col, name) in table.columns.iter().enumerate() {
    worksheet.write_string(0, col as u16, name)?;
  }

  for (row, cells) in table.rows.iter().enumerate() {
    let row = row as u32 + 1;
    for (col, cell) in cells.iter().enumerate() {
      let col = col as u16;
      match cell {
        CellValue::Null => {}
        CellValue::Bool(value) => {
          worksheet.write_boolean(row, col, *value)?;
        }
        CellValue::Int(value) => {
          worksheet.write_number(row, col, *value as f64)?;
        }
        CellValue::Float(value) => {
          worksheet.write_number(row, col, *value)?;
        }
        CellValue::Text(value) => {
          worksheet.write_string(row, col, value)?;
        }
      }
    }
  }

  workbook
    .save(path)
    .context(format!("Failed to save workbook {}", path.display()))?;

  info!("Wrote {} row(s) to {}", table.row_count(), path.display());

  Ok(())
}
