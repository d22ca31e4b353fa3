//! Symmetric uncertainty values recorded during one selection run

use std::collections::BTreeMap;

use serde::Serialize;

/// Identity of a recorded SU value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrelationKey {
    /// SU between a feature and the label.
    Label { feature: String },
    /// SU between two features. Stored with the names in sorted order so that
    /// (a, b) and (b, a) are the same key.
    Pair { first: String, second: String },
}

impl CorrelationKey {
    pub fn label(feature: impl Into<String>) -> Self {
        Self::Label {
            feature: feature.into(),
        }
    }

    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self::Pair { first: a, second: b }
        } else {
            Self::Pair { first: b, second: a }
        }
    }
}

/// One entry of the correlation table, flattened for export.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    #[serde(flatten)]
    pub key: CorrelationKey,
    pub su: f64,
}

/// SU values keyed by feature-label or unordered feature-feature identity.
///
/// Only pairs actually compared are present; the map is ordered so iteration is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrelationTable {
    entries: BTreeMap<CorrelationKey, f64>,
}

impl CorrelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_label(&mut self, feature: &str, su: f64) {
        self.entries.insert(CorrelationKey::label(feature), su);
    }

    pub fn insert_pair(&mut self, a: &str, b: &str, su: f64) {
        self.entries.insert(CorrelationKey::pair(a, b), su);
    }

    pub fn get(&self, key: &CorrelationKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// SU of `feature` with the label, if recorded.
    pub fn label_su(&self, feature: &str) -> Option<f64> {
        self.get(&CorrelationKey::label(feature))
    }

    /// SU between two features in either order, if they were compared.
    pub fn pair_su(&self, a: &str, b: &str) -> Option<f64> {
        self.get(&CorrelationKey::pair(a, b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|k| matches!(k, CorrelationKey::Pair { .. }))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CorrelationKey, f64)> {
        self.entries.iter().map(|(k, &v)| (k, v))
    }

    pub fn to_entries(&self) -> Vec<CorrelationEntry> {
        self.iter()
            .map(|(key, su)| CorrelationEntry {
                key: key.clone(),
                su,
            })
            .collect()
    }
}
