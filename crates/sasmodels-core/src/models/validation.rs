//! Opt-in bounds checks against a model's parameter table. The kernels never
//! call into this module; out-of-range values evaluate like any other `f64`.

use super::{ParameterInfo, ParameterKind, ScatteringModel};
use crate::common::constants::COUNT_PARAMETER_LIMIT;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("unknown parameter '{name}' for model '{model}'")]
    Unknown { model: &'static str, name: String },
    #[error("parameter '{name}' is NaN")]
    NotANumber { name: &'static str },
    #[error("parameter '{name}' = {value} is outside [{lower}, {upper}]")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },
    #[error("expected {expected} parameter values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl ParameterError {
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::Unknown { name, .. } => Some(name.as_str()),
            Self::NotANumber { name } | Self::OutOfBounds { name, .. } => Some(*name),
            Self::LengthMismatch { .. } => None,
        }
    }
}

/// Checks `values` against `infos` pairwise. Infinite values pass only where
/// the matching bound is itself infinite, except for count parameters, whose
/// upper bound is capped at [`COUNT_PARAMETER_LIMIT`].
pub fn validate_parameters(infos: &[ParameterInfo], values: &[f64]) -> Result<(), ParameterError> {
    if infos.len() != values.len() {
        return Err(ParameterError::LengthMismatch {
            expected: infos.len(),
            actual: values.len(),
        });
    }

    for (info, &value) in infos.iter().zip(values) {
        if value.is_nan() {
            return Err(ParameterError::NotANumber { name: info.name });
        }

        let upper = match info.kind {
            ParameterKind::Continuous => info.upper(),
            ParameterKind::Count => info.upper().min(COUNT_PARAMETER_LIMIT),
        };
        if value < info.lower() || value > upper {
            return Err(ParameterError::OutOfBounds {
                name: info.name,
                value,
                lower: info.lower(),
                upper,
            });
        }
    }

    Ok(())
}

pub fn validate_model(model: &dyn ScatteringModel) -> Result<(), ParameterError> {
    validate_parameters(model.parameter_info(), &model.parameter_values())
}
