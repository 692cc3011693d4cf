use crate::common::ConfigError;
use crate::models::ParameterError;
use crate::numerics::NumericTolerancePolicyError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SasResult<T> = Result<T, SasError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SasErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl SasErrorCategory {
    pub const fn exit_placeholder(self) -> ExitPlaceholder {
        match self {
            Self::Success => ExitPlaceholder {
                exit_code: 0,
                category_name: "Success",
            },
            Self::InputValidationError => ExitPlaceholder {
                exit_code: 2,
                category_name: "InputValidationError",
            },
            Self::IoSystemError => ExitPlaceholder {
                exit_code: 3,
                category_name: "IoSystemError",
            },
            Self::ComputationError => ExitPlaceholder {
                exit_code: 4,
                category_name: "ComputationError",
            },
            Self::InternalError => ExitPlaceholder {
                exit_code: 5,
                category_name: "InternalError",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_placeholder().exit_code
    }

    pub const fn category_name(self) -> &'static str {
        self.exit_placeholder().category_name
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPlaceholder {
    pub exit_code: i32,
    pub category_name: &'static str,
}

/// Categorised failure of an outer layer (CLI, parameter files, policy
/// loading). The numeric kernels never produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SasError {
    category: SasErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl SasError {
    pub fn new(
        category: SasErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SasErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SasErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SasErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SasErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> SasErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for SasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.category_name(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for SasError {}

impl From<ParameterError> for SasError {
    fn from(error: ParameterError) -> Self {
        let placeholder = match error {
            ParameterError::Unknown { .. } => "INPUT.UNKNOWN_PARAMETER",
            ParameterError::LengthMismatch { .. } => "INPUT.PARAMETER_COUNT",
            ParameterError::NotANumber { .. } | ParameterError::OutOfBounds { .. } => {
                "INPUT.PARAMETER_BOUNDS"
            }
        };
        Self::input_validation(placeholder, error.to_string())
    }
}

impl From<ConfigError> for SasError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Read { .. } => Self::io_system("IO.PARAMETER_FILE", error.to_string()),
            ConfigError::Parse { .. } => {
                Self::input_validation("INPUT.PARAMETER_FILE", error.to_string())
            }
        }
    }
}

impl From<NumericTolerancePolicyError> for SasError {
    fn from(error: NumericTolerancePolicyError) -> Self {
        match error {
            NumericTolerancePolicyError::Read { .. } => {
                Self::io_system("IO.TOLERANCE_POLICY", error.to_string())
            }
            NumericTolerancePolicyError::Parse { .. } => {
                Self::input_validation("INPUT.TOLERANCE_POLICY", error.to_string())
            }
        }
    }
}
