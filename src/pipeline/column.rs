//! Discrete column abstraction
//!
//! Every feature and the label are reduced to dense category codes before any
//! information measure is computed. Codes are assigned in order of first
//! appearance, so two columns with the same partition of rows get identical codes.

use std::collections::HashMap;
use std::hash::Hash;

use polars::prelude::*;

use super::error::{FcbfError, Result};

/// Category label used for null cells.
pub const MISSING_CATEGORY: &str = "<missing>";

/// A named categorical column stored as dense codes `0..cardinality`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteColumn {
    name: String,
    codes: Vec<u32>,
    categories: Vec<String>,
}

impl DiscreteColumn {
    /// Build a column from any sequence of hashable values.
    ///
    /// ```
    /// use fcbf::pipeline::DiscreteColumn;
    ///
    /// let col = DiscreteColumn::from_values("wind", ["weak", "strong", "weak"]);
    /// assert_eq!(col.codes(), &[0, 1, 0]);
    /// assert_eq!(col.cardinality(), 2);
    /// ```
    pub fn from_values<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Hash + Eq + ToString,
    {
        Self::encode(name, values, |value| value.to_string())
    }

    /// Build a column where `None` marks a null cell.
    ///
    /// Nulls form their own category labelled [`MISSING_CATEGORY`], kept apart
    /// from any present value that happens to render the same way.
    pub fn from_nullable<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Hash + Eq + ToString,
    {
        Self::encode(name, values, |value| match value {
            Some(v) => v.to_string(),
            None => MISSING_CATEGORY.to_string(),
        })
    }

    fn encode<I, K>(name: impl Into<String>, values: I, label: impl Fn(&K) -> String) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Hash + Eq,
    {
        let mut lookup: HashMap<K, u32> = HashMap::new();
        let mut categories = Vec::new();
        let codes = values
            .into_iter()
            .map(|value| {
                if let Some(&code) = lookup.get(&value) {
                    return code;
                }
                let code = categories.len() as u32;
                categories.push(label(&value));
                lookup.insert(value, code);
                code
            })
            .collect();

        Self {
            name: name.into(),
            codes,
            categories,
        }
    }

    /// Convert a polars column into a discrete column.
    ///
    /// Nulls become the [`MISSING_CATEGORY`] category. Float columns are accepted
    /// only when every non-null value is integral.
    pub fn from_polars(column: &Column) -> Result<Self> {
        let name = column.name().to_string();
        let dtype = column.dtype().clone();

        if dtype.is_nested() || matches!(dtype, DataType::Null) {
            return Err(FcbfError::UnsupportedDtype {
                name,
                dtype: dtype.to_string(),
            });
        }

        if dtype.is_float() {
            let floats = column.cast(&DataType::Float64)?;
            let is_integral = floats
                .f64()?
                .into_iter()
                .flatten()
                .all(|v| v.is_finite() && v.fract() == 0.0);
            if !is_integral {
                return Err(FcbfError::ContinuousColumn {
                    name,
                    dtype: dtype.to_string(),
                });
            }
            // Integral floats come from nullable integer columns (e.g. CSV with `?`).
            // Formatting the float keeps magnitudes outside the i64 range distinct.
            let values = floats
                .f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n + 0.0)));
            return Ok(Self::from_nullable(name, values));
        }

        let strings = column.cast(&DataType::String)?;
        let values = strings.str()?.into_iter();
        Ok(Self::from_nullable(name, values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Number of distinct categories observed.
    pub fn cardinality(&self) -> usize {
        self.categories.len()
    }

    /// Category labels indexed by code.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// A column with at most one category carries no information.
    pub fn is_constant(&self) -> bool {
        self.cardinality() <= 1
    }
}
