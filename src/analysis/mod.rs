// src/analysis/mod.rs
pub mod regression;

pub use regression::{fit, InsufficientDataError, RegressionResult};
