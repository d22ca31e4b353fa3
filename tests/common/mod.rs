//! Shared test utilities and fixture generators

use fcbf::pipeline::{Dataset, DiscreteColumn};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// Three features with a known outcome at threshold 0.1:
/// - `f1`: same partition as the label (SU = 1)
/// - `f2`: noisy copy of the label, fully explained by `f1` (redundant)
/// - `f3`: constant (SU = 0, below threshold)
pub fn create_redundancy_dataset() -> Dataset {
    let f1 = DiscreteColumn::from_values("f1", ["a", "a", "a", "a", "b", "b", "b", "b"]);
    let f2 = DiscreteColumn::from_values("f2", [0, 0, 0, 1, 1, 1, 1, 1]);
    let f3 = DiscreteColumn::from_values("f3", ["k"; 8]);
    let label = DiscreteColumn::from_values("label", [0, 0, 0, 0, 1, 1, 1, 1]);
    Dataset::new(vec![f1, f2, f3], label).unwrap()
}

/// Randomly generated categorical dataset with a mix of relevant, redundant and
/// noise features. Deterministic for a given seed.
pub fn create_random_dataset(rows: usize, cols: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let label: Vec<u32> = (0..rows).map(|_| rng.gen_range(0..3)).collect();

    let mut raw: Vec<Vec<u32>> = Vec::with_capacity(cols);
    for i in 0..cols {
        let values: Vec<u32> = match i % 4 {
            // Noisy copy of the label
            0 => label
                .iter()
                .map(|&y| if rng.gen_bool(0.7) { y } else { rng.gen_range(0..3) })
                .collect(),
            // Noisy copy of an earlier feature
            1 => raw[i - 1]
                .iter()
                .map(|&v| if rng.gen_bool(0.8) { v } else { rng.gen_range(0..4) })
                .collect(),
            // Coarsened label
            2 => label
                .iter()
                .map(|&y| if rng.gen_bool(0.9) { (y > 0) as u32 } else { 2 })
                .collect(),
            // Pure noise
            _ => (0..rows).map(|_| rng.gen_range(0..5)).collect(),
        };
        raw.push(values);
    }

    let features = raw
        .into_iter()
        .enumerate()
        .map(|(i, values)| DiscreteColumn::from_values(format!("feature_{}", i), values))
        .collect();
    Dataset::new(features, DiscreteColumn::from_values("target", label)).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
