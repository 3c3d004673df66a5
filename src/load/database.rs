use crate::table::{CellValue, DataTable};
use anyhow::{Context, Result as AnyhowResult};
use chrono::NaiveDateTime;
use duckdb::{AccessMode, Config, Connection, Row};
use log::info;
use std::path::Path;

/// Loads every row of one table from a DuckDB database file.
///
/// The database is opened read-only, so a missing or unreadable file fails
/// here instead of leaving a freshly created empty database behind. The
/// fixed query `SELECT * FROM <table_name>` is then executed and the full
/// result set is materialized, preserving the table's row and column order.
/// Column names are taken from the executed statement, so a table with zero
/// rows still yields its column names.
///
/// # Arguments
///
/// * `db_path` - Path of the DuckDB database file.
/// * `table_name` - Name of the table to load.
///
/// # Returns
///
/// * `Ok(DataTable)` - Every row and column of the table.
/// * `Err(anyhow::Error)` - Opening the database, preparing the query, or
///   reading the result failed.
///
/// # Examples
///
/// ```rust,no_run
/// use bottleneck_exports::load::query_table;
///
/// fn main() -> anyhow::Result<()> {
///     let table = query_table("/data/bottleneck.duckdb", "sales_report")?;
///     println!("{} rows, {} columns", table.row_count(), table.column_count());
///     Ok(())
/// }
/// ```
pub fn query_table<P: AsRef<Path>>(db_path: P, table_name: &str) -> AnyhowResult<DataTable> {
    let db_path = db_path.as_ref();
    let config = Config::default().access_mode(AccessMode::ReadOnly)?;
    let conn = Connection::open_with_flags(db_path, config)
        .context(format!("Failed to open database {}", db_path.display()))?;

    let sql = format!("SELECT * FROM {}", table_name);
    let mut stmt = conn
        .prepare(&sql)
        .context(format!("Failed to prepare query against table {}", table_name))?;

    let mapped = stmt
        .query_map([], |row| {
            let width = row.as_ref().column_count();
            Ok((0..width).map(|idx| read_cell(row, idx)).collect())
        })
        .context(format!("Failed to query table {}", table_name))?;

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for row in mapped {
        rows.push(row.context("Failed to read row from query result")?);
    }

    // The statement has executed by now, so names are available even when
    // the result set is empty.
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    info!(
        "Loaded {} row(s) from table {} in {}",
        rows.len(),
        table_name,
        db_path.display()
    );

    Ok(DataTable::new(columns, rows))
}

/// Reads one cell of a result row into a `CellValue`.
///
/// Columns are probed with typed gets from the narrowest family outward;
/// the first type the driver accepts wins. Timestamps are rendered to their
/// `YYYY-MM-DD HH:MM:SS` text form. SQL NULL, and any value type outside
/// these families, comes back as `CellValue::Null`.
fn read_cell(row: &Row, idx: usize) -> CellValue {
    if let Ok(Some(value)) = row.get::<_, Option<i64>>(idx) {
        return CellValue::Int(value);
    }
    if let Ok(Some(value)) = row.get::<_, Option<f64>>(idx) {
        return CellValue::Float(value);
    }
    if let Ok(Some(value)) = row.get::<_, Option<bool>>(idx) {
        return CellValue::Bool(value);
    }
    if let Ok(Some(value)) = row.get::<_, Option<NaiveDateTime>>(idx) {
        return CellValue::Text(value.to_string());
    }
    if let Ok(Some(value)) = row.get::<_, Option<String>>(idx) {
        return CellValue::Text(value);
    }
    CellValue::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Creates a database file holding the two-row sales_report fixture.
    fn create_sales_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE sales_report (id INTEGER, name VARCHAR, price DOUBLE);
             INSERT INTO sales_report VALUES (1, 'Widget', 9.99), (2, 'Gadget', 19.99);",
        )
        .unwrap();
    }

    /// Tests that every row and column of the table is loaded in order.
    #[test]
    fn test_query_table_loads_all_rows() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("bottleneck.duckdb");
        create_sales_db(&db_path);

        let table = query_table(&db_path, "sales_report").unwrap();

        assert_eq!(table.columns, vec!["id", "name", "price"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Int(1),
                CellValue::Text("Widget".to_string()),
                CellValue::Float(9.99),
            ]
        );
        assert_eq!(
            table.rows[1],
            vec![
                CellValue::Int(2),
                CellValue::Text("Gadget".to_string()),
                CellValue::Float(19.99),
            ]
        );
    }

    /// Tests that NULL cells load as CellValue::Null.
    #[test]
    fn test_query_table_preserves_nulls() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("bottleneck.duckdb");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE sales_report (id INTEGER, name VARCHAR);
                 INSERT INTO sales_report VALUES (1, NULL);",
            )
            .unwrap();
        }

        let table = query_table(&db_path, "sales_report").unwrap();

        assert_eq!(
            table.rows[0],
            vec![CellValue::Int(1), CellValue::Null]
        );
    }

    /// Tests that an empty table still reports its column names.
    #[test]
    fn test_query_table_empty_table_keeps_columns() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("bottleneck.duckdb");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch("CREATE TABLE sales_report (id INTEGER, name VARCHAR);")
                .unwrap();
        }

        let table = query_table(&db_path, "sales_report").unwrap();

        assert_eq!(table.columns, vec!["id", "name"]);
        assert!(table.is_empty());
    }

    /// Tests that a missing database file fails without creating one.
    #[test]
    fn test_query_table_missing_database() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("missing.duckdb");

        let result = query_table(&db_path, "sales_report");

        assert!(result.is_err());
        assert!(!db_path.exists());
    }

    /// Tests that querying a table that does not exist fails.
    #[test]
    fn test_query_table_missing_table() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("bottleneck.duckdb");
        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch("CREATE TABLE other_table (id INTEGER);")
                .unwrap();
        }

        let result = query_table(&db_path, "sales_report");

        assert!(result.is_err());
    }
}
