//! Information measures over discrete columns
//!
//! Entropy, conditional entropy, information gain and symmetric uncertainty (SU)
//! computed from empirical value frequencies. All terms of one SU computation use
//! the same [`LogBase`]. SU itself does not depend on the base because the mutual
//! information is normalized by the marginal entropies.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::column::DiscreteColumn;
use super::error::{FcbfError, Result};

/// Logarithm base for entropy calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogBase(f64);

impl LogBase {
    /// Natural logarithm (nats).
    pub const E: LogBase = LogBase(std::f64::consts::E);
    /// Base 2 (bits).
    pub const TWO: LogBase = LogBase(2.0);
    /// Base 10 (dits).
    pub const TEN: LogBase = LogBase(10.0);

    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(FcbfError::InvalidBase(base));
        }
        Ok(Self(base))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert a quantity measured in nats into this base.
    fn scale_nats(&self, nats: f64) -> f64 {
        if nats == 0.0 {
            return 0.0;
        }
        nats / self.0.ln()
    }
}

impl Default for LogBase {
    fn default() -> Self {
        Self::E
    }
}

impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::E {
            write!(f, "e")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for LogBase {
    type Err = FcbfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "e" | "ln" | "natural" => Ok(Self::E),
            other => {
                let value: f64 = other
                    .parse()
                    .map_err(|_| FcbfError::UnparsableBase(s.trim().to_string()))?;
                Self::new(value)
            }
        }
    }
}

/// Shannon entropy in nats of a set of frequency counts over `total` observations.
///
/// Counts are summed in ascending order so the result does not depend on the
/// order in which categories were discovered.
fn entropy_nats(mut counts: Vec<usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    counts.sort_unstable();
    let n = total as f64;
    let nats: f64 = counts
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum();
    nats.max(0.0)
}

fn marginal_counts(column: &DiscreteColumn) -> Vec<usize> {
    let mut counts = vec![0usize; column.cardinality()];
    for &code in column.codes() {
        counts[code as usize] += 1;
    }
    counts
}

fn check_aligned(a: &DiscreteColumn, b: &DiscreteColumn) -> Result<()> {
    if a.len() != b.len() {
        return Err(FcbfError::LengthMismatch {
            left: a.name().to_string(),
            left_len: a.len(),
            right: b.name().to_string(),
            right_len: b.len(),
        });
    }
    for column in [a, b] {
        if column.is_empty() {
            return Err(FcbfError::EmptyColumn {
                name: column.name().to_string(),
            });
        }
    }
    Ok(())
}

fn marginal_nats(column: &DiscreteColumn) -> f64 {
    entropy_nats(marginal_counts(column), column.len())
}

fn joint_nats(a: &DiscreteColumn, b: &DiscreteColumn) -> Result<f64> {
    check_aligned(a, b)?;
    let mut joint: HashMap<(u32, u32), usize> = HashMap::new();
    for (&x, &y) in a.codes().iter().zip(b.codes()) {
        *joint.entry((x, y)).or_insert(0) += 1;
    }
    Ok(entropy_nats(joint.into_values().collect(), a.len()))
}

/// Entropy H(X) of a column. Empty and single-category columns yield 0.
///
/// For a base below 1 the logarithm is negative, and so is every nonzero entropy.
pub fn entropy(column: &DiscreteColumn, base: LogBase) -> f64 {
    base.scale_nats(marginal_nats(column))
}

/// Joint entropy H(A, B) of two aligned columns.
pub fn joint_entropy(a: &DiscreteColumn, b: &DiscreteColumn, base: LogBase) -> Result<f64> {
    Ok(base.scale_nats(joint_nats(a, b)?))
}

/// Conditional entropy H(A | B) = H(A, B) - H(B).
pub fn conditional_entropy(a: &DiscreteColumn, b: &DiscreteColumn, base: LogBase) -> Result<f64> {
    let h_joint = joint_nats(a, b)?;
    Ok(base.scale_nats((h_joint - marginal_nats(b)).max(0.0)))
}

/// Information gain IG(A | B) = H(A) - H(A | B).
pub fn information_gain(a: &DiscreteColumn, b: &DiscreteColumn, base: LogBase) -> Result<f64> {
    let h_joint = joint_nats(a, b)?;
    let h_cond = (h_joint - marginal_nats(b)).max(0.0);
    Ok(base.scale_nats((marginal_nats(a) - h_cond).max(0.0)))
}

/// Symmetric uncertainty SU(A, B) = 2 * IG(A | B) / (H(A) + H(B)), in [0, 1].
///
/// Returns 0 when both columns are constant. The gain is evaluated as
/// `H(A) + H(B) - H(A, B)`, which is the same quantity written so that swapping
/// the arguments produces a bit-identical result. The ratio is taken in nats,
/// where the base cancels, so every valid base gives the same value.
pub fn symmetric_uncertainty(a: &DiscreteColumn, b: &DiscreteColumn, _base: LogBase) -> Result<f64> {
    let h_joint = joint_nats(a, b)?;
    let h_sum = marginal_nats(a) + marginal_nats(b);
    if h_sum <= 0.0 {
        return Ok(0.0);
    }
    let gain = (h_sum - h_joint).max(0.0);
    Ok((2.0 * gain / h_sum).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn col(name: &str, values: &[&str]) -> DiscreteColumn {
        DiscreteColumn::from_values(name, values.iter().copied())
    }

    #[test]
    fn test_fair_coin_entropy() {
        let coin = col("coin", &["h", "t", "h", "t"]);
        assert!((entropy(&coin, LogBase::TWO) - 1.0).abs() < EPS);
        assert!((entropy(&coin, LogBase::E) - 2f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_uniform_four_categories() {
        let c = col("c", &["a", "b", "c", "d"]);
        assert!((entropy(&c, LogBase::TWO) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_entropy_is_zero() {
        assert_eq!(entropy(&col("k", &["x", "x", "x"]), LogBase::TWO), 0.0);
        assert_eq!(entropy(&col("empty", &[]), LogBase::TWO), 0.0);
    }

    #[test]
    fn test_conditional_entropy_of_self_is_zero() {
        let a = col("a", &["x", "y", "z", "x"]);
        assert!(conditional_entropy(&a, &a, LogBase::TWO).unwrap().abs() < EPS);
    }

    #[test]
    fn test_conditional_entropy_independent() {
        let a = col("a", &["0", "0", "1", "1"]);
        let b = col("b", &["0", "1", "0", "1"]);
        let h = conditional_entropy(&a, &b, LogBase::TWO).unwrap();
        assert!((h - 1.0).abs() < EPS);
        assert!(information_gain(&a, &b, LogBase::TWO).unwrap().abs() < EPS);
    }

    #[test]
    fn test_su_identical_columns_is_one() {
        let a = col("a", &["x", "y", "x", "z"]);
        let b = col("b", &["p", "q", "p", "r"]);
        let su = symmetric_uncertainty(&a, &b, LogBase::E).unwrap();
        assert!((su - 1.0).abs() < EPS);
    }

    #[test]
    fn test_su_both_constant_is_zero() {
        let a = col("a", &["x", "x", "x"]);
        let b = col("b", &["y", "y", "y"]);
        assert_eq!(symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap(), 0.0);
    }

    #[test]
    fn test_su_is_exactly_symmetric() {
        let a = col("a", &["1", "2", "2", "3", "1", "3", "3"]);
        let b = col("b", &["x", "x", "y", "y", "y", "x", "y"]);
        let ab = symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap();
        let ba = symmetric_uncertainty(&b, &a, LogBase::TWO).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_su_base_invariant() {
        let a = col("a", &["1", "2", "2", "3", "1", "3"]);
        let b = col("b", &["x", "x", "y", "y", "y", "x"]);
        let su_2 = symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap();
        let su_e = symmetric_uncertainty(&a, &b, LogBase::E).unwrap();
        let su_10 = symmetric_uncertainty(&a, &b, LogBase::TEN).unwrap();
        assert!((su_2 - su_e).abs() < 1e-9);
        assert!((su_2 - su_10).abs() < 1e-9);
    }

    #[test]
    fn test_length_mismatch_error() {
        let a = col("a", &["x", "y"]);
        let b = col("b", &["x"]);
        let err = symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap_err();
        assert!(matches!(
            err,
            FcbfError::LengthMismatch { left_len: 2, right_len: 1, .. }
        ));
    }

    #[test]
    fn test_empty_input_error() {
        let a = col("a", &[]);
        let b = col("b", &[]);
        let err = symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap_err();
        assert!(matches!(err, FcbfError::EmptyColumn { ref name } if name == "a"));
    }

    #[test]
    fn test_log_base_validation() {
        assert!(LogBase::new(0.0).is_err());
        assert!(LogBase::new(-2.0).is_err());
        assert!(LogBase::new(1.0).is_err());
        assert!(LogBase::new(f64::INFINITY).is_err());
        assert_eq!(LogBase::new(2.0).unwrap(), LogBase::TWO);
    }

    #[test]
    fn test_log_base_from_str() {
        assert_eq!("e".parse::<LogBase>().unwrap(), LogBase::E);
        assert_eq!("ln".parse::<LogBase>().unwrap(), LogBase::E);
        assert_eq!("2".parse::<LogBase>().unwrap(), LogBase::TWO);
        assert!("abc".parse::<LogBase>().is_err());
        assert!("1".parse::<LogBase>().is_err());
        assert!(matches!(
            "abc".parse::<LogBase>().unwrap_err(),
            FcbfError::UnparsableBase(ref raw) if raw == "abc"
        ));
        assert!("0.5".parse::<LogBase>().is_ok());
        assert_eq!(LogBase::E.to_string(), "e");
        assert_eq!(LogBase::TWO.to_string(), "2");
    }

    #[test]
    fn test_base_below_one_keeps_information() {
        let half = LogBase::new(0.5).unwrap();
        let a = col("a", &["x", "y", "x", "z"]);
        let b = col("b", &["p", "q", "p", "r"]);

        // log base 1/2 flips the sign of base-2 measures
        assert!((entropy(&a, half) + entropy(&a, LogBase::TWO)).abs() < EPS);
        let su_half = symmetric_uncertainty(&a, &b, half).unwrap();
        let su_two = symmetric_uncertainty(&a, &b, LogBase::TWO).unwrap();
        assert!((su_half - 1.0).abs() < EPS);
        assert_eq!(su_half, su_two);
        assert_eq!(entropy(&col("k", &["x", "x"]), half), 0.0);
    }
}
