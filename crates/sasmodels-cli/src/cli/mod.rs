mod commands;
mod dispatch;
mod helpers;

use clap::Parser;
use sasmodels_core::common::ConfigError;
use sasmodels_core::domain::SasError;
use sasmodels_core::models::ParameterError;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let sas_error = error.as_sas_error();
            tracing::debug!(category = sas_error.category().category_name(), "command failed");
            eprintln!("{}", sas_error.diagnostic_line());
            if let Some(summary_line) = sas_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            sas_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "sasmodels-rs",
    version,
    about = "Small-angle scattering model kernels and special functions"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Evaluate I(q) over a list or grid of q values
    Iq(commands::IqArgs),
    /// Evaluate I(qx, qy) for paired qx/qy values
    Iqxy(commands::IqxyArgs),
    /// Evaluate a special function approximation
    Special(commands::SpecialArgs),
    /// List a model's parameters, units, defaults and limits
    Params(commands::ParamsArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Iq(args) => commands::run_iq_command(args),
        CliCommand::Iqxy(args) => commands::run_iqxy_command(args),
        CliCommand::Special(args) => commands::run_special_command(args),
        CliCommand::Params(args) => commands::run_params_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SasError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_sas_error(&self) -> SasError {
        match self {
            Self::Usage(message) => SasError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SasError::internal("INTERNAL.CLI", format!("{error:#}")),
        }
    }
}

impl From<SasError> for CliError {
    fn from(error: SasError) -> Self {
        Self::Compute(error)
    }
}

impl From<ParameterError> for CliError {
    fn from(error: ParameterError) -> Self {
        Self::Compute(SasError::from(error))
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::Compute(SasError::from(error))
    }
}
