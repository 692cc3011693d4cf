use super::CliError;
use super::dispatch::{known_model_names, model_command_spec};
use anyhow::Context;
use sasmodels_core::domain::SasError;
use sasmodels_core::models::ScatteringModel;
use sasmodels_core::numerics::{linear_grid, log_grid};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so stdout
/// stays machine-readable.
pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParameterOverride {
    pub(super) name: String,
    pub(super) value: f64,
}

pub(super) fn parse_parameter_override(token: &str) -> Result<ParameterOverride, String> {
    let (name, value) = token
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{token}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{token}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid value for '{name}': {error}"))?;

    Ok(ParameterOverride {
        name: name.to_string(),
        value,
    })
}

/// Resolves the model, reads the optional parameter file and applies
/// `--set` overrides in order.
pub(super) fn load_model(
    model_name: &str,
    parameter_file: Option<&Path>,
    overrides: &[ParameterOverride],
) -> Result<Box<dyn ScatteringModel>, CliError> {
    let spec = model_command_spec(model_name).ok_or_else(|| {
        SasError::input_validation(
            "INPUT.UNKNOWN_MODEL",
            format!(
                "unknown model '{model_name}' (known: {})",
                known_model_names()
            ),
        )
    })?;

    let mut model = spec.load(parameter_file)?;
    if let Some(path) = parameter_file {
        tracing::debug!(model = spec.name, path = %path.display(), "loaded parameter file");
    }

    for parameter in overrides {
        model.set_parameter(&parameter.name, parameter.value)?;
        tracing::debug!(
            model = spec.name,
            parameter = %parameter.name,
            value = parameter.value,
            "applied parameter override"
        );
    }

    Ok(model)
}

pub(super) fn build_q_grid(
    q: &[f64],
    q_min: Option<f64>,
    q_max: Option<f64>,
    points: Option<usize>,
    log_spaced: bool,
) -> Result<Vec<f64>, CliError> {
    if !q.is_empty() {
        return Ok(q.to_vec());
    }

    let (Some(q_min), Some(q_max), Some(points)) = (q_min, q_max, points) else {
        return Err(CliError::Usage(
            "either --q or all of --q-min, --q-max and --points are required".to_string(),
        ));
    };

    if points < 2 {
        return Err(CliError::Usage(format!(
            "--points must be at least 2, got {points}"
        )));
    }

    if log_spaced {
        log_grid(q_min, q_max, points).ok_or_else(|| {
            CliError::Usage(format!(
                "log-spaced grid needs positive --q-min and --q-max, got {q_min} and {q_max}"
            ))
        })
    } else {
        linear_grid(q_min, q_max, points)
            .ok_or_else(|| CliError::Usage("failed to build q grid".to_string()))
    }
}

/// With validation on, validated parameters must produce finite output.
pub(super) fn check_finite(model: &str, values: &[f64]) -> Result<(), CliError> {
    let non_finite = values.iter().filter(|value| !value.is_finite()).count();
    if non_finite == 0 {
        return Ok(());
    }

    Err(SasError::computation(
        "COMPUTE.NON_FINITE",
        format!("{model} produced {non_finite} non-finite value(s) from validated parameters"),
    )
    .into())
}

pub(super) fn warn_non_finite(model: &str, values: &[f64]) {
    let non_finite = values.iter().filter(|value| !value.is_finite()).count();
    if non_finite > 0 {
        tracing::warn!(model, count = non_finite, "non-finite values in output");
    }
}

pub(super) fn format_limit(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

pub(super) fn render_json<T: serde::Serialize>(report: &T) -> Result<String, CliError> {
    let mut rendered =
        serde_json::to_string_pretty(report).context("failed to serialize report")?;
    rendered.push('\n');
    Ok(rendered)
}

pub(super) fn emit(output: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| {
                SasError::io_system(
                    "IO.OUTPUT_FILE",
                    format!("failed to write output '{}': {source}", path.display()),
                )
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
