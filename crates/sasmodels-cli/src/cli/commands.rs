use super::CliError;
use super::dispatch::{known_model_names, model_command_spec};
use super::helpers::{
    ParameterOverride, build_q_grid, check_finite, emit, format_limit, load_model,
    parse_parameter_override, render_json, warn_non_finite,
};
use sasmodels_core::domain::SasError;
use sasmodels_core::models::{ScatteringModel, validate_model};
use sasmodels_core::numerics::format_numeric_for_policy;
use sasmodels_core::numerics::special::SpecialFunction;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ModelArgs {
    /// Model name or alias (multilayer_vesicle, multi_shell)
    #[arg(value_name = "MODEL")]
    model: String,

    /// JSON parameter file; omitted parameters keep model defaults
    #[arg(long = "params", value_name = "FILE")]
    parameter_file: Option<PathBuf>,

    /// Parameter override, applied after --params (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_parameter_override)]
    overrides: Vec<ParameterOverride>,

    /// Check parameters against model limits before evaluating
    #[arg(long)]
    validate: bool,
}

#[derive(clap::Args)]
pub(super) struct OutputArgs {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
#[command(group(clap::ArgGroup::new("grid").required(true).args(["q", "q_min"])))]
pub(super) struct IqArgs {
    #[command(flatten)]
    model: ModelArgs,

    /// Explicit q values in 1/Ang
    #[arg(long, num_args = 1.., value_name = "Q", allow_negative_numbers = true)]
    q: Vec<f64>,

    /// First q of a generated grid
    #[arg(long, requires_all = ["q_max", "points"])]
    q_min: Option<f64>,

    /// Last q of a generated grid
    #[arg(long, requires = "q_min")]
    q_max: Option<f64>,

    /// Number of grid points, end points included
    #[arg(long, requires = "q_min")]
    points: Option<usize>,

    /// Space grid points logarithmically
    #[arg(long, requires = "q_min")]
    log_spaced: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
pub(super) struct IqxyArgs {
    #[command(flatten)]
    model: ModelArgs,

    /// qx values in 1/Ang
    #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
    qx: Vec<f64>,

    /// qy values in 1/Ang, paired with --qx
    #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
    qy: Vec<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
pub(super) struct SpecialArgs {
    /// j0, j1, y0, j0-compact, j1-compact, sph-j1c, 2j1x-x or ln-gamma
    #[arg(value_name = "FUNCTION")]
    function: String,

    /// Arguments to evaluate
    #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
    x: Vec<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args)]
pub(super) struct ParamsArgs {
    /// Model name or alias
    #[arg(value_name = "MODEL")]
    model: String,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ModelReport<P> {
    model: &'static str,
    parameters: BTreeMap<&'static str, f64>,
    effective_radius: f64,
    points: Vec<P>,
}

#[derive(Serialize)]
struct IqPoint {
    q: f64,
    intensity: f64,
}

#[derive(Serialize)]
struct IqxyPoint {
    qx: f64,
    qy: f64,
    intensity: f64,
}

#[derive(Serialize)]
struct SpecialReport {
    function: &'static str,
    points: Vec<SpecialPoint>,
}

#[derive(Serialize)]
struct SpecialPoint {
    x: f64,
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    regime: Option<&'static str>,
}

#[derive(Serialize)]
struct ParameterRow {
    name: &'static str,
    units: &'static str,
    default: f64,
    lower: Option<f64>,
    upper: Option<f64>,
    description: &'static str,
}

fn prepare_model(args: &ModelArgs) -> Result<Box<dyn ScatteringModel>, CliError> {
    let model = load_model(&args.model, args.parameter_file.as_deref(), &args.overrides)?;
    if args.validate {
        validate_model(model.as_ref())?;
        tracing::debug!(model = model.name(), "parameters validated");
    }
    Ok(model)
}

fn model_report<P>(model: &dyn ScatteringModel, points: Vec<P>) -> ModelReport<P> {
    let parameters = model
        .parameter_info()
        .iter()
        .map(|info| info.name)
        .zip(model.parameter_values())
        .collect();

    ModelReport {
        model: model.name(),
        parameters,
        effective_radius: model.effective_radius(),
        points,
    }
}

fn table_header(model: &dyn ScatteringModel, columns: &str) -> String {
    let mut rendered = format!("# model {}\n#", model.name());
    for (info, value) in model.parameter_info().iter().zip(model.parameter_values()) {
        let _ = write!(rendered, " {}={}", info.name, value);
    }
    let _ = writeln!(rendered, "\n# {columns}");
    rendered
}

fn finish_values(
    model: &dyn ScatteringModel,
    validate: bool,
    values: &[f64],
) -> Result<(), CliError> {
    if validate {
        check_finite(model.name(), values)
    } else {
        warn_non_finite(model.name(), values);
        Ok(())
    }
}

pub(super) fn run_iq_command(args: IqArgs) -> Result<i32, CliError> {
    let model = prepare_model(&args.model)?;
    let q = build_q_grid(&args.q, args.q_min, args.q_max, args.points, args.log_spaced)?;
    let intensities = model.iq_grid(&q);
    tracing::info!(model = model.name(), points = q.len(), "evaluated I(q)");
    finish_values(model.as_ref(), args.model.validate, &intensities)?;

    let rendered = if args.output.json {
        let points = q
            .iter()
            .zip(&intensities)
            .map(|(&q, &intensity)| IqPoint { q, intensity })
            .collect();
        render_json(&model_report(model.as_ref(), points))?
    } else {
        let mut rendered = table_header(model.as_ref(), "q\tI(q)");
        for (&q, &intensity) in q.iter().zip(&intensities) {
            let _ = writeln!(
                rendered,
                "{}\t{}",
                format_numeric_for_policy(q),
                format_numeric_for_policy(intensity)
            );
        }
        rendered
    };

    emit(args.output.output.as_deref(), &rendered)?;
    Ok(0)
}

pub(super) fn run_iqxy_command(args: IqxyArgs) -> Result<i32, CliError> {
    if args.qx.len() != args.qy.len() {
        return Err(CliError::Usage(format!(
            "--qx and --qy must have the same length, got {} and {}",
            args.qx.len(),
            args.qy.len()
        )));
    }

    let model = prepare_model(&args.model)?;
    let intensities: Vec<f64> = args
        .qx
        .iter()
        .zip(&args.qy)
        .map(|(&qx, &qy)| model.iqxy(qx, qy))
        .collect();
    tracing::info!(
        model = model.name(),
        points = intensities.len(),
        "evaluated I(qx, qy)"
    );
    finish_values(model.as_ref(), args.model.validate, &intensities)?;

    let rendered = if args.output.json {
        let points = args
            .qx
            .iter()
            .zip(&args.qy)
            .zip(&intensities)
            .map(|((&qx, &qy), &intensity)| IqxyPoint { qx, qy, intensity })
            .collect();
        render_json(&model_report(model.as_ref(), points))?
    } else {
        let mut rendered = table_header(model.as_ref(), "qx\tqy\tI(qx,qy)");
        for ((&qx, &qy), &intensity) in args.qx.iter().zip(&args.qy).zip(&intensities) {
            let _ = writeln!(
                rendered,
                "{}\t{}\t{}",
                format_numeric_for_policy(qx),
                format_numeric_for_policy(qy),
                format_numeric_for_policy(intensity)
            );
        }
        rendered
    };

    emit(args.output.output.as_deref(), &rendered)?;
    Ok(0)
}

pub(super) fn run_special_command(args: SpecialArgs) -> Result<i32, CliError> {
    let function = SpecialFunction::from_name(&args.function).ok_or_else(|| {
        let known = SpecialFunction::ALL
            .iter()
            .map(|function| function.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        SasError::input_validation(
            "INPUT.UNKNOWN_FUNCTION",
            format!("unknown function '{}' (known: {known})", args.function),
        )
    })?;

    let approximation = function.approximation();
    let points: Vec<SpecialPoint> = args
        .x
        .iter()
        .map(|&x| SpecialPoint {
            x,
            value: function.evaluate(x),
            regime: approximation.map(|approximation| approximation.regime(x).as_str()),
        })
        .collect();
    tracing::info!(
        function = function.as_str(),
        points = points.len(),
        "evaluated special function"
    );

    let rendered = if args.output.json {
        render_json(&SpecialReport {
            function: function.as_str(),
            points,
        })?
    } else {
        let mut rendered = format!("# function {function}\n# x\tvalue\tregime\n");
        for point in &points {
            let _ = writeln!(
                rendered,
                "{}\t{}\t{}",
                format_numeric_for_policy(point.x),
                format_numeric_for_policy(point.value),
                point.regime.unwrap_or("-")
            );
        }
        rendered
    };

    emit(args.output.output.as_deref(), &rendered)?;
    Ok(0)
}

pub(super) fn run_params_command(args: ParamsArgs) -> Result<i32, CliError> {
    let spec = model_command_spec(&args.model).ok_or_else(|| {
        SasError::input_validation(
            "INPUT.UNKNOWN_MODEL",
            format!(
                "unknown model '{}' (known: {})",
                args.model,
                known_model_names()
            ),
        )
    })?;
    let model = spec.load(None)?;

    let rows: Vec<ParameterRow> = model
        .parameter_info()
        .iter()
        .map(|info| ParameterRow {
            name: info.name,
            units: info.units,
            default: info.default,
            lower: format_limit(info.lower()),
            upper: format_limit(info.upper()),
            description: info.description,
        })
        .collect();

    let rendered = if args.json {
        render_json(&rows)?
    } else {
        let mut rendered = format!("# {}: {}\n", spec.name, spec.summary);
        let _ = writeln!(
            rendered,
            "{:<14} {:<11} {:>8} {:>6} {:>6}  description",
            "name", "units", "default", "lower", "upper"
        );
        for info in model.parameter_info() {
            let _ = writeln!(
                rendered,
                "{:<14} {:<11} {:>8} {:>6} {:>6}  {}",
                info.name,
                info.units,
                info.default,
                info.lower(),
                info.upper(),
                info.description
            );
        }
        rendered
    };

    print!("{rendered}");
    Ok(0)
}
