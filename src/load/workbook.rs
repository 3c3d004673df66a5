use crate::table::{CellValue, DataTable};
use anyhow::{Context, Result as AnyhowResult};
use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads the first worksheet of an Excel workbook into a `DataTable`.
///
/// The first row of the sheet becomes the column names and every following
/// row becomes a data row, in sheet order. Only the first worksheet is read;
/// any further sheets are ignored.
///
/// # Arguments
///
/// * `path` - Path of the `.xlsx` workbook to read.
///
/// # Returns
///
/// * `Ok(DataTable)` - The sheet's header and data rows.
/// * `Err(anyhow::Error)` - The file is missing, is not a parseable
///   workbook, or holds no sheets.
///
/// # Examples
///
/// ```rust,no_run
/// use bottleneck_exports::load::read_xlsx;
///
/// fn main() -> anyhow::Result<()> {
///     let table = read_xlsx("data/Fichier_erp.xlsx")?;
///     println!("{} rows", table.row_count());
///     Ok(())
/// }
/// ```
pub fn read_xlsx<P: AsRef<Path>>(path: P) -> AnyhowResult<DataTable> {
    let path = path.as_ref();
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)
        .context(format!("Failed to open workbook {}", path.display()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .context(format!("No sheets found in workbook {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .context(format!("Sheet {} missing from {}", sheet, path.display()))?
        .context(format!("Failed to read sheet {} of {}", sheet, path.display()))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = sheet_rows
        .next()
        .map(|header| header.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<CellValue>> = sheet_rows
        .map(|row| row.iter().map(read_cell).collect())
        .collect();

    info!(
        "Read {} row(s) from sheet {} of {}",
        rows.len(),
        sheet,
        path.display()
    );

    Ok(DataTable::new(columns, rows))
}

/// Converts one workbook cell into a `CellValue`.
///
/// The XLSX format stores every number as a double, so numeric cells come
/// back as `Float` even when they display as integers. Date-formatted cells
/// are rendered to their `YYYY-MM-DD HH:MM:SS` text form. Cell kinds with no
/// direct counterpart fall back to their display rendering.
fn read_cell(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty => CellValue::Null,
        DataType::String(value) => CellValue::Text(value.clone()),
        DataType::Float(value) => CellValue::Float(*value),
        DataType::Int(value) => CellValue::Int(*value),
        DataType::Bool(value) => CellValue::Bool(*value),
        DataType::DateTime(_) => match cell.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.to_string()),
            None => CellValue::Null,
        },
        other => CellValue::Text(other.to_string()),
    }
}
