//! Aligned feature and label columns ready for selection

use std::collections::HashSet;

use polars::prelude::*;

use super::column::DiscreteColumn;
use super::error::{FcbfError, Result};

/// A validated set of discrete feature columns plus the label column.
///
/// Invariants: at least one feature, no column empty, every column the same
/// length as the label, feature names unique.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<DiscreteColumn>,
    label: DiscreteColumn,
}

impl Dataset {
    pub fn new(features: Vec<DiscreteColumn>, label: DiscreteColumn) -> Result<Self> {
        if features.is_empty() {
            return Err(FcbfError::EmptyDataset);
        }
        if label.is_empty() {
            return Err(FcbfError::EmptyColumn {
                name: label.name().to_string(),
            });
        }

        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(feature.name()) {
                return Err(FcbfError::DuplicateFeature {
                    name: feature.name().to_string(),
                });
            }
            if feature.len() != label.len() {
                return Err(FcbfError::LengthMismatch {
                    left: feature.name().to_string(),
                    left_len: feature.len(),
                    right: label.name().to_string(),
                    right_len: label.len(),
                });
            }
        }

        Ok(Self { features, label })
    }

    /// Build a dataset from a frame, using every non-target column as a feature.
    pub fn from_dataframe(df: &DataFrame, target: &str) -> Result<Self> {
        let available: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let label_col = df.column(target).map_err(|_| FcbfError::ColumnNotFound {
            name: target.to_string(),
            available: available.clone(),
        })?;
        let label = DiscreteColumn::from_polars(label_col)?;

        let features = df
            .get_columns()
            .iter()
            .filter(|col| col.name().as_str() != target)
            .map(DiscreteColumn::from_polars)
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "dataset built: {} features, {} rows, label '{}' with {} classes",
            features.len(),
            label.len(),
            label.name(),
            label.cardinality()
        );

        Self::new(features, label)
    }

    pub fn features(&self) -> &[DiscreteColumn] {
        &self.features
    }

    pub fn label(&self) -> &DiscreteColumn {
        &self.label
    }

    pub fn feature(&self, name: &str) -> Option<&DiscreteColumn> {
        self.features.iter().find(|f| f.name() == name)
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    pub fn n_rows(&self) -> usize {
        self.label.len()
    }

    /// A new dataset restricted to the named features, in the given order.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let features = names
            .iter()
            .map(|name| {
                self.feature(name.as_ref())
                    .cloned()
                    .ok_or_else(|| FcbfError::ColumnNotFound {
                        name: name.as_ref().to_string(),
                        available: self.features.iter().map(|f| f.name().to_string()).collect(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(features, self.label.clone())
    }
}
