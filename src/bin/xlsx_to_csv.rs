//! Xlsx to Csv: Excel Workbooks to CSV Files
//!
//! This application converts a fixed set of three Excel workbooks into CSV
//! files. Each workbook's first worksheet is read in full before any CSV
//! file is written, then every sheet is written out row by row with its
//! first row serving as the CSV header.
//!
//! ## Purpose
//! The goal is to turn the ERP, web, and liaison workbooks delivered as
//! `.xlsx` files into plain CSV files that downstream tooling can ingest,
//! with no transformation of the data along the way.
//!
//! ## Design Overview
//! - **Loading**: Reads each workbook using the `load` module.
//! - **Converting**: Pairs inputs with outputs and orders the work via the `convert` module.
//!
//! ## Usage
//! 1. Place `Fichier_erp.xlsx`, `Fichier_web.xlsx`, and `fichier_liaison.xlsx`
//!    in the input directory.
//! 2. Configure the application using either a `.env` file or command-line arguments:
//!    - **Using a `.env` file**: Create a `.env` file in the project root with:
//!      ```env
//!      INPUT_DIR=data
//!      OUTPUT_DIR=data
//!      ```
//!    - **Using CLI arguments**: Pass arguments when running the application (see below).
//! 3. Run the application:
//!    ```sh
//!    cargo run --bin xlsx-to-csv -- --input-dir data --output-dir data
//!    ```
//! 4. Logs will be output to the console, controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run --bin xlsx-to-csv
//!    ```
//!
//! ## Notes
//! - All three workbooks are read before the first CSV file is written, so a
//!   missing or corrupt input fails the run without touching any output.
//! - The application writes nothing to stdout; progress goes to the log.

use bottleneck_exports::convert::{convert_workbooks, ConversionJob};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::error::Error;
use std::path::PathBuf;

/// The fixed workbook-to-CSV pairings, as delivered by the data provider.
const WORKBOOKS: [(&str, &str); 3] = [
  ("Fichier_erp.xlsx", "erp.csv"),
  ("Fichier_web.xlsx", "web.csv"),
  ("fichier_liaison.xlsx", "liaison.csv"),
];

/// Command-line arguments for configuring the workbook conversion.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Directory holding the input `.xlsx` workbooks.
  #[clap(long, env = "INPUT_DIR", default_value = "data")]
  input_dir: PathBuf,

  /// Directory to write the output `.csv` files into.
  #[clap(long, env = "OUTPUT_DIR", default_value = "data")]
  output_dir: PathBuf,
}

/// Converts the three delivered Excel workbooks to CSV files.
///
/// This function:
/// 1. Loads configuration from environment variables or command-line arguments.
/// 2. Builds the conversion jobs from the fixed workbook pairings.
/// 3. Reads every workbook, then writes every CSV file.
/// 4. Logs progress at each step using the `log` crate.
///
/// # Returns
/// - `Ok(())` if all conversions complete successfully.
/// - `Err(Box<dyn Error>)` if any workbook cannot be read or any CSV cannot be written.
fn main() -> Result<(), Box<dyn Error>> {
  // Initialize logging
  env_logger::init();

  // Load environment variables from .env file (if present)
  dotenv().ok();

  // Parse command-line arguments
  let args = Args::parse();
  info!(
    "Converting workbooks from {} into {}",
    args.input_dir.display(),
    args.output_dir.display()
  );

  // Pair each workbook with its CSV counterpart
  let jobs: Vec<ConversionJob> = WORKBOOKS
    .iter()
    .map(|(input, output)| {
      ConversionJob::new(args.input_dir.join(input), args.output_dir.join(output))
    })
    .collect();

  // Read everything, then write everything
  let converted = convert_workbooks(&jobs)?;
  info!("Converted {} workbook(s)", converted);

  Ok(())
}
