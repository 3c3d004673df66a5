//! # Converting Excel Workbooks to CSV Files
//!
//! This module orchestrates the workbook-to-CSV conversion run: a fixed set
//! of input/output pairings is read in full, and only once every input has
//! been loaded are the CSV files written. A bad input therefore fails the
//! whole run before any output file is touched, so a partially readable
//! batch never produces a partial set of outputs.
//!
//! ## Usage
//!
//! Build one [`ConversionJob`] per workbook and hand the batch to
//! [`convert_workbooks`].
//!
//! ## Submodules
//!
//! - **batch**: Contains the conversion job type and the batch runner.

mod batch;

pub use batch::{convert_workbooks, ConversionJob};
