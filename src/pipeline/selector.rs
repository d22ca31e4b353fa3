//! Fast Correlation-Based Filter (Yu & Liu, ICML 2003)
//!
//! Phase 1 scores every feature against the label with symmetric uncertainty and
//! keeps those at or above the threshold, ranked by descending SU (stable on
//! ties). Phase 2 walks the ranking: each remaining feature in turn becomes the
//! predominant feature and removes every lower-ranked feature that is at least as
//! correlated with it as with the label.

use rayon::prelude::*;
use serde::Serialize;

use super::correlation::CorrelationTable;
use super::dataset::Dataset;
use super::entropy::{symmetric_uncertainty, LogBase};
use super::error::{FcbfError, Result};

/// Parameters for one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FcbfConfig {
    su_threshold: f64,
    base: LogBase,
    parallel: bool,
}

impl FcbfConfig {
    pub fn new(su_threshold: f64, base: LogBase) -> Result<Self> {
        let config = Self {
            su_threshold,
            base,
            parallel: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Toggle rayon in the class-relevance pass. The result is identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn su_threshold(&self) -> f64 {
        self.su_threshold
    }

    pub fn base(&self) -> LogBase {
        self.base
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.su_threshold) {
            return Err(FcbfError::InvalidThreshold(self.su_threshold));
        }
        LogBase::new(self.base.value())?;
        Ok(())
    }
}

impl Default for FcbfConfig {
    fn default() -> Self {
        Self {
            su_threshold: 0.0,
            base: LogBase::default(),
            parallel: true,
        }
    }
}

/// A feature together with its SU against the label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    pub name: String,
    pub su_label: f64,
}

/// A feature eliminated because a higher-ranked feature dominates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redundancy {
    pub feature: String,
    pub dominated_by: String,
    /// SU between the eliminated feature and the dominating feature.
    pub su_pair: f64,
    /// SU between the eliminated feature and the label.
    pub su_label: f64,
}

/// Outcome of a selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected features in selection order (descending SU with the label).
    pub relevant: Vec<RankedFeature>,
    /// Features not selected, in original column order.
    pub irrelevant: Vec<String>,
    /// Features removed in Phase 1, in original column order.
    pub below_threshold: Vec<String>,
    /// Phase 2 eliminations in the order they happened.
    pub redundancies: Vec<Redundancy>,
    /// Every SU value computed during the run.
    pub correlations: CorrelationTable,
}

impl Selection {
    pub fn relevant_names(&self) -> Vec<&str> {
        self.relevant.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_relevant(&self, name: &str) -> bool {
        self.relevant.iter().any(|f| f.name == name)
    }

    pub fn redundant_names(&self) -> Vec<&str> {
        self.redundancies.iter().map(|r| r.feature.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    index: usize,
    su_label: f64,
}

/// Runs FCBF over a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct FcbfSelector {
    config: FcbfConfig,
}

impl FcbfSelector {
    pub fn new(config: FcbfConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FcbfConfig {
        &self.config
    }

    pub fn select(&self, dataset: &Dataset) -> Result<Selection> {
        self.config.validate()?;
        let base = self.config.base;
        let threshold = self.config.su_threshold;
        let features = dataset.features();
        let label = dataset.label();

        // Phase 1: class relevance. Each SU reads only its own column and the label.
        let su_labels: Vec<f64> = if self.config.parallel {
            features
                .par_iter()
                .map(|f| symmetric_uncertainty(f, label, base))
                .collect::<Result<Vec<_>>>()?
        } else {
            features
                .iter()
                .map(|f| symmetric_uncertainty(f, label, base))
                .collect::<Result<Vec<_>>>()?
        };

        let mut correlations = CorrelationTable::new();
        let mut candidates = Vec::new();
        let mut below_threshold = Vec::new();
        for (index, (feature, &su)) in features.iter().zip(&su_labels).enumerate() {
            correlations.insert_label(feature.name(), su);
            if su >= threshold {
                candidates.push(Candidate { index, su_label: su });
            } else {
                below_threshold.push(feature.name().to_string());
            }
        }

        // Stable sort keeps original column order among equal SU values
        candidates.sort_by(|a, b| b.su_label.total_cmp(&a.su_label));

        log::debug!(
            "ranked candidates: {:?}",
            candidates
                .iter()
                .map(|c| (features[c.index].name(), c.su_label))
                .collect::<Vec<_>>()
        );
        log::info!(
            "{} of {} features pass su_threshold {}",
            candidates.len(),
            features.len(),
            threshold
        );

        // Phase 2: predominant correlation elimination, strictly sequential.
        let mut removed = vec![false; candidates.len()];
        let mut relevant = Vec::new();
        let mut redundancies = Vec::new();

        for p in 0..candidates.len() {
            if removed[p] {
                continue;
            }
            let f_p = &features[candidates[p].index];
            log::debug!("predominant feature: {}", f_p.name());

            for q in (p + 1)..candidates.len() {
                if removed[q] {
                    continue;
                }
                let f_q = &features[candidates[q].index];
                let su_pq = symmetric_uncertainty(f_p, f_q, base)?;
                correlations.insert_pair(f_p.name(), f_q.name(), su_pq);

                if su_pq >= candidates[q].su_label {
                    removed[q] = true;
                    log::debug!(
                        "  redundant: {} (su_pq = {:.6}, su_qc = {:.6})",
                        f_q.name(),
                        su_pq,
                        candidates[q].su_label
                    );
                    redundancies.push(Redundancy {
                        feature: f_q.name().to_string(),
                        dominated_by: f_p.name().to_string(),
                        su_pair: su_pq,
                        su_label: candidates[q].su_label,
                    });
                }
            }

            relevant.push(RankedFeature {
                name: f_p.name().to_string(),
                su_label: candidates[p].su_label,
            });
        }

        let irrelevant = features
            .iter()
            .map(|f| f.name())
            .filter(|name| !relevant.iter().any(|r| r.name == *name))
            .map(str::to_string)
            .collect();

        log::info!(
            "selected {} features, {} redundant, {} below threshold",
            relevant.len(),
            redundancies.len(),
            below_threshold.len()
        );

        Ok(Selection {
            relevant,
            irrelevant,
            below_threshold,
            redundancies,
            correlations,
        })
    }
}

/// Run FCBF with the given threshold and logarithm base.
pub fn fcbf(dataset: &Dataset, su_threshold: f64, base: LogBase) -> Result<Selection> {
    FcbfSelector::new(FcbfConfig::new(su_threshold, base)?).select(dataset)
}
