pub mod polynomial;
pub mod special;

pub use polynomial::{MonicPolynomial, Polynomial, evaluate_monic_polynomial, evaluate_polynomial};
pub use special::{
    Cutoff, Reflection, Regime, RegimeSplitApproximation, bessel_j0, bessel_j0_compact, bessel_j1,
    bessel_j1_compact, bessel_y0, ln_gamma_lanczos, sph_j1c, two_j1x_over_x,
};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const NUMERIC_TOLERANCE_POLICY_PATH: &str = "tasks/numeric-tolerance-policy.json";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NumericTolerance {
    #[serde(rename = "absTol")]
    pub abs_tol: f64,
    #[serde(rename = "relTol")]
    pub rel_tol: f64,
    #[serde(rename = "relativeFloor")]
    pub relative_floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyToleranceComparison {
    pub abs_diff: f64,
    pub rel_diff: f64,
    pub passes: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NumericTolerancePolicy {
    #[serde(rename = "policyVersion")]
    pub policy_version: String,
    #[serde(rename = "defaultMode")]
    pub default_mode: String,
    #[serde(default)]
    pub categories: Vec<NumericToleranceCategory>,
}

impl NumericTolerancePolicy {
    pub fn tolerance_for_category(&self, category_id: &str) -> Option<NumericTolerance> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .and_then(|category| category.tolerance)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NumericToleranceCategory {
    pub id: String,
    pub mode: String,
    #[serde(default)]
    pub description: String,
    pub tolerance: Option<NumericTolerance>,
}

#[derive(Debug, thiserror::Error)]
pub enum NumericTolerancePolicyError {
    #[error("failed to read numeric tolerance policy '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse numeric tolerance policy '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_numeric_tolerance_policy(
    policy_path: impl AsRef<Path>,
) -> Result<NumericTolerancePolicy, NumericTolerancePolicyError> {
    let policy_path = policy_path.as_ref();
    let source =
        fs::read_to_string(policy_path).map_err(|source| NumericTolerancePolicyError::Read {
            path: policy_path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&source).map_err(|source| NumericTolerancePolicyError::Parse {
        path: policy_path.to_path_buf(),
        source,
    })
}

pub fn compare_with_policy_tolerance(
    baseline: f64,
    actual: f64,
    tolerance: NumericTolerance,
) -> PolicyToleranceComparison {
    let abs_diff = (actual - baseline).abs();
    let rel_denominator = baseline.abs().max(tolerance.relative_floor);
    let rel_diff = abs_diff / rel_denominator;
    let passes = abs_diff <= tolerance.abs_tol || abs_diff <= tolerance.rel_tol * rel_denominator;

    PolicyToleranceComparison {
        abs_diff,
        rel_diff,
        passes,
    }
}

pub fn format_numeric_for_policy(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value == f64::INFINITY {
        return "inf".to_string();
    }

    if value == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    format!("{value:.15E}")
}

/// Evenly spaced grid including both end points.
pub fn linear_grid(start: f64, end: f64, count: usize) -> Option<Vec<f64>> {
    if count < 2 {
        return None;
    }

    let step = (end - start) / ((count - 1) as f64);
    let mut grid = Vec::with_capacity(count);
    for index in 0..count {
        grid.push(start + step * (index as f64));
    }

    if let Some(last) = grid.last_mut() {
        *last = end;
    }

    Some(grid)
}

/// Logarithmically spaced grid including both end points; both ends must be
/// strictly positive.
pub fn log_grid(start: f64, end: f64, count: usize) -> Option<Vec<f64>> {
    if !(start > 0.0 && end > 0.0) {
        return None;
    }

    let mut grid: Vec<f64> = linear_grid(start.log10(), end.log10(), count)?
        .into_iter()
        .map(|exponent| 10.0_f64.powf(exponent))
        .collect();

    grid[0] = start;
    if let Some(last) = grid.last_mut() {
        *last = end;
    }

    Some(grid)
}
