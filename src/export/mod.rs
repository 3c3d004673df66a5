//! Tools for writing an in-memory table out to a file format.
//!
//! This module provides the bulk writers of the crate. Each writer consumes
//! a [`DataTable`] and produces exactly one output file, creating or
//! overwriting it at the given path. The rows and columns written are the
//! rows and columns of the table, in order, with no row-index column and no
//! header artifacts beyond the column names.
//!
//! ## Usage
//!
//! [`write_xlsx`] writes the table as a single-worksheet Excel workbook with
//! typed cells. [`write_csv`] writes the table as minimally quoted CSV with
//! one header line.
//!
//! ## Submodules
//!
//! - **workbook**: Excel workbook writer.
//! - **csv**: CSV file writer.
//!
//! [`DataTable`]: crate::table::DataTable

mod csv;
mod workbook;

pub use self::csv::write_csv;
pub use self::workbook::write_xlsx;
