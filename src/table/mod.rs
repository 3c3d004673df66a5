//! # In-Memory Tabular Data
//!
//! This module defines the transient table representation shared by every
//! reader and writer in the crate: an ordered list of column names and an
//! ordered list of rows, each row holding one [`CellValue`] per column. A
//! table is created by a single bulk read, handed to a single bulk write,
//! and discarded; nothing in the crate mutates it in between, which is what
//! keeps the written rows and columns identical to the ones read.
//!
//! ## Submodules
//!
//! - **types**: Defines the `DataTable` and `CellValue` types.

mod types;

pub use types::{CellValue, DataTable};
