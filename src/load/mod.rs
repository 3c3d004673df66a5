//! # Loading Tabular Data into Memory
//!
//! This module provides the bulk readers of the crate. Each reader opens one
//! data source, materializes every row of it into a [`DataTable`], and
//! closes the source again; nothing is streamed, filtered, or transformed
//! on the way in.
//!
//! ## Usage
//!
//! [`query_table`] runs `SELECT *` against one table of a DuckDB database
//! file. [`read_xlsx`] reads the first worksheet of an Excel workbook,
//! treating the first row as the column names.
//!
//! ## Submodules
//!
//! - **database**: Loads a table from a DuckDB database file.
//! - **workbook**: Loads the first worksheet of an Excel workbook.
//!
//! [`DataTable`]: crate::table::DataTable

mod database;
mod workbook;

pub use database::query_table;
pub use workbook::read_xlsx;
