//! Export Sales: DuckDB Table to Excel Workbook
//!
//! This application exports the full content of a DuckDB table to a new Excel
//! workbook. It reads every row of the table into memory, writes the column
//! names as the first worksheet row, and appends one worksheet row per table
//! row, preserving the database types.
//!
//! ## Purpose
//! The goal is a single-shot snapshot of the `sales_report` table as an
//! `.xlsx` file that spreadsheet users can open directly, with no manual
//! querying involved.
//!
//! ## Design Overview
//! - **Loading**: Reads the table from DuckDB using the `load` module.
//! - **Exporting**: Writes the rows to an Excel workbook via the `export` module.
//!
//! ## Usage
//! 1. Configure the application using either a `.env` file or command-line arguments:
//!    - **Using a `.env` file**: Create a `.env` file in the project root with:
//!      ```env
//!      DATABASE_PATH=/data/bottleneck.duckdb
//!      TABLE_NAME=sales_report
//!      OUTPUT_PATH=/data/sales_report.xlsx
//!      ```
//!    - **Using CLI arguments**: Pass arguments when running the application (see below).
//! 2. Run the application:
//!    ```sh
//!    cargo run --bin export-sales -- --database /data/bottleneck.duckdb --table sales_report --output /data/sales_report.xlsx
//!    ```
//! 3. Logs will be output to the console, controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run --bin export-sales
//!    ```
//!
//! ## Notes
//! - The database is opened read-only; the only file touched is the output workbook.
//! - On success the application prints a confirmation line to stdout.

use bottleneck_exports::export::write_xlsx;
use bottleneck_exports::load::query_table;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::error::Error;
use std::path::PathBuf;

/// Command-line arguments for configuring the sales export.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Path of the DuckDB database file to read from.
  #[clap(long, env = "DATABASE_PATH", default_value = "/data/bottleneck.duckdb")]
  database: PathBuf,

  /// Name of the table to export.
  #[clap(long, env = "TABLE_NAME", default_value = "sales_report")]
  table: String,

  /// Path of the Excel workbook to write.
  #[clap(long, env = "OUTPUT_PATH", default_value = "/data/sales_report.xlsx")]
  output: PathBuf,
}

/// Exports a DuckDB table to an Excel workbook.
///
/// This function:
/// 1. Loads configuration from environment variables or command-line arguments.
/// 2. Reads the full table content from the DuckDB database.
/// 3. Writes the rows to a new Excel workbook, replacing any existing file.
/// 4. Prints a confirmation line to stdout.
///
/// # Returns
/// - `Ok(())` if the export completes successfully.
/// - `Err(Box<dyn Error>)` if any step fails (e.g., missing database, unwritable output).
fn main() -> Result<(), Box<dyn Error>> {
  // Initialize logging
  env_logger::init();

  // Load environment variables from .env file (if present)
  dotenv().ok();

  // Parse command-line arguments
  let args = Args::parse();
  info!("Exporting table {} from {}", args.table, args.database.display());

  // Read the full table content
  let table = query_table(&args.database, &args.table)?;
  info!("Loaded {} row(s)", table.row_count());

  // Write the workbook
  write_xlsx(&table, &args.output)?;
  info!("Wrote {}", args.output.display());

  println!("Excel file exported successfully.");

  Ok(())
}
