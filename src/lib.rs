//! FCBF: Fast Correlation-Based Filter
//!
//! Feature selection for categorical data using symmetric uncertainty:
//! features weakly related to the label are filtered out, then features
//! dominated by a more relevant, highly correlated peer are eliminated.

pub mod cli;
pub mod datasets;
pub mod pipeline;
pub mod report;
pub mod utils;
