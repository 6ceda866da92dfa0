// src/analysis/regression.rs
use thiserror::Error;

#[derive(Debug, Error)]
#[error("need at least 2 paired points for a linear fit, got {points}")]
pub struct InsufficientDataError {
    pub points: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
}

/// Closed-form ordinary least squares for `y = slope * x + intercept`.
///
/// Mismatched-length input counts as insufficient data, as does an x column
/// with zero spread (the slope would be undefined).
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<RegressionResult, InsufficientDataError> {
    let n = xs.len().min(ys.len());
    if xs.len() != ys.len() || n < 2 {
        return Err(InsufficientDataError { points: n });
    }

    let count = n as f64;
    let mean_x = xs.iter().sum::<f64>() / count;
    let mean_y = ys.iter().sum::<f64>() / count;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx == 0.0 {
        return Err(InsufficientDataError { points: n });
    }

    let slope = sxy / sxx;
    Ok(RegressionResult {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
