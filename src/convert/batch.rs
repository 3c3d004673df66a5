use crate::export::write_csv;
use crate::load::read_xlsx;
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use std::path::PathBuf;

/// One workbook-to-CSV pairing: which file to read and where to write it.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Path of the input `.xlsx` workbook.
    pub input: PathBuf,
    /// Path of the output `.csv` file.
    pub output: PathBuf,
}

impl ConversionJob {
    /// Creates a job from an input and an output path.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ConversionJob {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Converts a batch of Excel workbooks to CSV files.
///
/// Every input workbook is read before any CSV file is written, in job
/// order. A failure reading any input therefore fails the run with no
/// output written and existing output files untouched; a failure while
/// writing leaves the outputs written so far in place, as the writes are
/// sequential. Each output holds the full content of its input's first
/// worksheet, untransformed.
///
/// # Arguments
///
/// * `jobs` - The input/output pairings to convert, in order.
///
/// # Returns
///
/// * `Ok(usize)` - The number of workbooks converted.
/// * `Err(anyhow::Error)` - Reading an input or writing an output failed.
///
/// # Examples
///
/// ```rust,no_run
/// use bottleneck_exports::convert::{convert_workbooks, ConversionJob};
///
/// fn main() -> anyhow::Result<()> {
///     let jobs = vec![
///         ConversionJob::new("data/Fichier_erp.xlsx", "data/erp.csv"),
///         ConversionJob::new("data/Fichier_web.xlsx", "data/web.csv"),
///     ];
///     let converted = convert_workbooks(&jobs)?;
///     println!("Converted {} workbook(s)", converted);
///     Ok(())
/// }
/// ```
pub fn convert_workbooks(jobs: &[ConversionJob]) -> AnyhowResult<usize> {
    let mut tables = Vec::with_capacity(jobs.len());
    for job in jobs {
        let table = read_xlsx(&job.input)
            .context(format!("Failed to read workbook {}", job.input.display()))?;
        tables.push(table);
    }

    for (job, table) in jobs.iter().zip(tables.iter()) {
        write_csv(table, &job.output)
            .context(format!("Failed to write CSV file {}", job.output.display()))?;
        info!(
            "Converted {} to {}",
            job.input.display(),
            job.output.display()
        );
    }

    Ok(jobs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::write_xlsx;
    use crate::table::{CellValue, DataTable};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_fixture(path: &Path, sku: &str, qty: i64) {
        let table = DataTable::new(
            vec!["sku".to_string(), "qty".to_string()],
            vec![vec![
                CellValue::Text(sku.to_string()),
                CellValue::Int(qty),
            ]],
        );
        write_xlsx(&table, path).unwrap();
    }

    /// Tests converting a full batch of workbooks.
    #[test]
    fn test_convert_workbooks_converts_every_job() {
        let dir = tempdir().unwrap();
        write_fixture(&dir.path().join("Fichier_erp.xlsx"), "A100", 5);
        write_fixture(&dir.path().join("Fichier_web.xlsx"), "B200", 8);
        write_fixture(&dir.path().join("fichier_liaison.xlsx"), "C300", 2);
        let jobs = vec![
            ConversionJob::new(dir.path().join("Fichier_erp.xlsx"), dir.path().join("erp.csv")),
            ConversionJob::new(dir.path().join("Fichier_web.xlsx"), dir.path().join("web.csv")),
            ConversionJob::new(
                dir.path().join("fichier_liaison.xlsx"),
                dir.path().join("liaison.csv"),
            ),
        ];

        let converted = convert_workbooks(&jobs).unwrap();

        assert_eq!(converted, 3);
        assert_eq!(
            fs::read_to_string(dir.path().join("erp.csv")).unwrap(),
            "sku,qty\nA100,5\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("web.csv")).unwrap(),
            "sku,qty\nB200,8\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("liaison.csv")).unwrap(),
            "sku,qty\nC300,2\n"
        );
    }

    /// Tests that a missing input fails the run before anything is written.
    #[test]
    fn test_convert_workbooks_writes_nothing_on_bad_input() {
        let dir = tempdir().unwrap();
        write_fixture(&dir.path().join("Fichier_erp.xlsx"), "A100", 5);
        let jobs = vec![
            ConversionJob::new(dir.path().join("Fichier_erp.xlsx"), dir.path().join("erp.csv")),
            ConversionJob::new(dir.path().join("missing.xlsx"), dir.path().join("web.csv")),
        ];

        let result = convert_workbooks(&jobs);

        assert!(result.is_err());
        assert!(!dir.path().join("erp.csv").exists());
        assert!(!dir.path().join("web.csv").exists());
    }

    /// Tests that an empty batch converts nothing and succeeds.
    #[test]
    fn test_convert_workbooks_empty_batch() {
        assert_eq!(convert_workbooks(&[]).unwrap(), 0);
    }
}
