//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::pipeline::{LoadOptions, LogBase};

/// FCBF - Select a minimal, non-redundant set of categorical features
#[derive(Parser, Debug)]
#[command(name = "fcbf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Label column name. Headerless CSV columns are named column_1, column_2, ...
    #[arg(short, long)]
    pub target: String,

    /// Output file path for the reduced dataset (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_reduced' suffix (e.g., data.csv -> data_reduced.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON report path. Defaults to input directory with '_fcbf_report.json' suffix.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Symmetric uncertainty threshold - drop features whose SU with the target is below this value
    #[arg(long, default_value = "0.0", value_parser = validate_su_threshold)]
    pub su_threshold: f64,

    /// Logarithm base for entropy calculations: "e" (default), "2", "10" or any positive number
    #[arg(long, default_value = "e", value_parser = parse_log_base)]
    pub base: LogBase,

    /// Treat the first CSV row as data rather than column names
    #[arg(long, default_value = "false")]
    pub no_header: bool,

    /// Token marking a missing value in CSV input (e.g. "?")
    #[arg(long)]
    pub null_value: Option<String>,

    /// Columns to drop before processing (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Score features against the target on a single thread
    #[arg(long, default_value = "false")]
    pub sequential: bool,

    /// Print only warnings and the selected feature names
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the output path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase())
                .filter(|e| e == "csv" || e == "parquet")
                .unwrap_or_else(|| "csv".to_string());
            sibling_path(&self.input, &format!("_reduced.{}", extension))
        })
    }

    /// Get the JSON report path, deriving from input if not explicitly provided.
    pub fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| sibling_path(&self.input, "_fcbf_report.json"))
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            has_header: !self.no_header,
            null_value: self.null_value.clone(),
            infer_schema_length: self.infer_schema_length,
        }
    }
}

fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}{}", stem, suffix))
}

/// Validator for su_threshold parameter
fn validate_su_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "su_threshold must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

/// Parser for the logarithm base
fn parse_log_base(s: &str) -> Result<LogBase, String> {
    s.parse::<LogBase>().map_err(|e| e.to_string())
}
