//! JSON parameter files for the model structs.
//!
//! A file holds a flat object keyed by parameter name. Omitted parameters
//! keep their model defaults and unknown keys are rejected, so a typo never
//! silently falls back to a default.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read parameter file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse parameter file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

pub fn load_model_parameters<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_model_parameters(&source, path)
}

/// Parses `source`; `origin` is only used in error messages.
pub fn parse_model_parameters<T: DeserializeOwned>(
    source: &str,
    origin: impl AsRef<Path>,
) -> Result<T, ConfigError> {
    serde_json::from_str(source).map_err(|source| ConfigError::Parse {
        path: origin.as_ref().to_path_buf(),
        source,
    })
}
