//! Selection export to JSON

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CorrelationEntry, FcbfConfig, RankedFeature, Redundancy, Selection};

/// Metadata about the selection run
#[derive(Serialize)]
pub struct SelectionMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub fcbf_version: String,
    pub input_file: String,
    pub target_column: String,
    pub su_threshold: f64,
    /// Logarithm base used for every entropy term
    pub log_base: f64,
    pub rows: usize,
}

/// Counts of the selection outcome
#[derive(Serialize)]
pub struct SelectionCounts {
    pub total_features: usize,
    pub selected: usize,
    pub below_threshold: usize,
    pub redundant: usize,
    pub pairs_compared: usize,
}

/// Complete selection export
#[derive(Serialize)]
pub struct SelectionExport<'a> {
    pub metadata: SelectionMetadata,
    pub summary: SelectionCounts,
    pub relevant: &'a [RankedFeature],
    pub irrelevant: &'a [String],
    pub below_threshold: &'a [String],
    pub redundancies: &'a [Redundancy],
    pub correlations: Vec<CorrelationEntry>,
}

/// Parameters for the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub target_column: &'a str,
    pub config: &'a FcbfConfig,
    pub rows: usize,
}

/// Build the serializable export for a selection
pub fn build_export<'a>(selection: &'a Selection, params: &ExportParams) -> SelectionExport<'a> {
    SelectionExport {
        metadata: SelectionMetadata {
            timestamp: Utc::now().to_rfc3339(),
            fcbf_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.to_string(),
            su_threshold: params.config.su_threshold(),
            log_base: params.config.base().value(),
            rows: params.rows,
        },
        summary: SelectionCounts {
            total_features: selection.relevant.len() + selection.irrelevant.len(),
            selected: selection.relevant.len(),
            below_threshold: selection.below_threshold.len(),
            redundant: selection.redundancies.len(),
            pairs_compared: selection.correlations.pair_count(),
        },
        relevant: &selection.relevant,
        irrelevant: &selection.irrelevant,
        below_threshold: &selection.below_threshold,
        redundancies: &selection.redundancies,
        correlations: selection.correlations.to_entries(),
    }
}

/// Export a selection to a pretty-printed JSON file
pub fn export_selection(
    selection: &Selection,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_export(selection, params);

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize selection to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write selection report to {}", output_path.display()))?;

    Ok(())
}
