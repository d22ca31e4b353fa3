//! Dataset loader and writer for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// Options controlling how an input file is parsed.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether the first CSV row holds column names. Headerless files get
    /// polars' default names (`column_1`, `column_2`, ...).
    pub has_header: bool,
    /// Token treated as a missing value in CSV input (e.g. `?`).
    pub null_value: Option<String>,
    /// Rows used for CSV schema inference; 0 means a full scan.
    pub infer_schema_length: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            null_value: None,
            infer_schema_length: 10000,
        }
    }
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn scan_dataset(path: &Path, options: &LoadOptions) -> Result<LazyFrame> {
    let extension = file_extension(path);

    let lf = match extension.as_str() {
        "csv" | "data" | "txt" => {
            let schema_length = match options.infer_schema_length {
                0 => None,
                n => Some(n),
            };
            LazyCsvReader::new(path)
                .with_has_header(options.has_header)
                .with_infer_schema_length(schema_length)
                .with_null_values(
                    options
                        .null_value
                        .as_ref()
                        .map(|v| NullValues::AllColumnsSingle(v.as_str().into())),
                )
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, data, txt, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Load a dataset from a file (CSV or Parquet based on extension)
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    scan_dataset(path, options)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Load a dataset behind a spinner.
///
/// Returns the frame with its row count, column count and estimated size in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    options: &LoadOptions,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = load_dataset(path, options)?;
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    finish_with_success(&spinner, &format!("Loaded {} rows x {} columns", rows, cols));
    log::debug!("loaded {}: {} rows, {} columns", path.display(), rows, cols);
    Ok((df, rows, cols, memory_mb))
}

/// Read only the schema and return the column names.
pub fn get_column_names(path: &Path, options: &LoadOptions) -> Result<Vec<String>> {
    let schema = scan_dataset(path, options)?
        .collect_schema()
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Save dataset to file (CSV or Parquet based on extension)
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let extension = file_extension(path);

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        ),
    }

    Ok(())
}
