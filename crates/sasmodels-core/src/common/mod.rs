pub mod config;
pub mod constants;

pub use config::{ConfigError, load_model_parameters, parse_model_parameters};
