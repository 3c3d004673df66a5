//! Bottleneck Export Tools Library
//!
//! This library backs the `export-sales` and `xlsx-to-csv` binaries: it
//! loads tabular data from a DuckDB database or an Excel workbook into an
//! in-memory table and writes that table back out as an Excel workbook or a
//! CSV file.
//!

pub mod table;
pub mod load;
pub mod export;
pub mod convert;
