use crate::table::DataTable;
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use std::path::Path;

/// Writes a table to a CSV file.
///
/// The first line lists the column names; every data row follows as one
/// line, cells rendered through their display form (`Null` as an empty
/// field) with minimal quoting for embedded delimiters, quotes, and
/// newlines. There is no row-index column. An existing file at the path is
/// overwritten. A table with no columns produces an empty file rather than
/// an empty header line.
///
/// # Arguments
///
/// * `table` - The table to write.
/// * `path` - Destination path of the `.csv` file.
///
/// # Returns
///
/// * `Ok(())` - The file was written and flushed.
/// * `Err(anyhow::Error)` - Creating, writing, or flushing the file failed.
///
/// # Examples
///
/// ```rust,no_run
/// use bottleneck_exports::export::write_csv;
/// use bottleneck_exports::table::{CellValue, DataTable};
///
/// fn main() -> anyhow::Result<()> {
///     let table = DataTable::new(
///         vec!["sku".to_string(), "qty".to_string()],
///         vec![vec![CellValue::Text("A100".to_string()), CellValue::Int(5)]],
///     );
///     write_csv(&table, "data/erp.csv")?;
///     Ok(())
/// }
/// ```
pub fn write_csv<P: AsRef<Path>>(table: &DataTable, path: P) -> AnyhowResult<()> {
  let path = path.as_ref();
  let mut writer = csv::Writer::from_path(path)
    .context(format!("Failed to create CSV file {}", path.display()))?;

  if !table.columns.is_empty() {
    writer
      .write_record(&table.columns)
      .context("Failed to write CSV header")?;
  }

  for row in &table.rows {
    writer
      .write_record(row.iter().map(|cell| cell.to_string()))
      .context(format!("Failed to write CSV row to {}", path.display()))?;
  }

  writer
    .flush()
    .context(format!("Failed to flush CSV file {}", path.display()))?;

  info!("Wrote {} row(s) to {}", table.row_count(), path.display());

  Ok(())
}
