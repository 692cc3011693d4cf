pub mod multi_shell;
pub mod multilayer_vesicle;
pub mod shell_stack;
pub mod validation;

pub use multi_shell::MultiShell;
pub use multilayer_vesicle::MultilayerVesicle;
pub use shell_stack::{
    ShellGeometry, ShellPair, ShellStackAccumulator, shell_pair_count, shell_stack_accumulate,
    shell_stack_intensity, sphere_volume,
};
pub use validation::{ParameterError, validate_model, validate_parameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Continuous,
    /// Drives a loop in the kernel; validation caps it at
    /// [`COUNT_PARAMETER_LIMIT`](crate::common::constants::COUNT_PARAMETER_LIMIT).
    Count,
}

/// One row of a model's parameter table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterInfo {
    pub name: &'static str,
    pub units: &'static str,
    pub default: f64,
    pub limits: [f64; 2],
    pub description: &'static str,
    pub kind: ParameterKind,
}

impl ParameterInfo {
    pub const fn new(
        name: &'static str,
        units: &'static str,
        default: f64,
        limits: [f64; 2],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            units,
            default,
            limits,
            description,
            kind: ParameterKind::Continuous,
        }
    }

    pub const fn count(
        name: &'static str,
        default: f64,
        limits: [f64; 2],
        description: &'static str,
    ) -> Self {
        Self {
            kind: ParameterKind::Count,
            ..Self::new(name, "", default, limits, description)
        }
    }

    pub const fn lower(&self) -> f64 {
        self.limits[0]
    }

    pub const fn upper(&self) -> f64 {
        self.limits[1]
    }
}

/// Isotropic scattering model evaluated from a parameter struct.
///
/// Implementors provide `I(q)`; the oriented form reduces to the magnitude
/// `sqrt(qx*qx + qy*qy)` so both entry points share a single kernel.
pub trait ScatteringModel {
    fn name(&self) -> &'static str;

    fn parameter_info(&self) -> &'static [ParameterInfo];

    /// Current values in [`Self::parameter_info`] order.
    fn parameter_values(&self) -> Vec<f64>;

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ParameterError>;

    fn iq(&self, q: f64) -> f64;

    fn iqxy(&self, qx: f64, qy: f64) -> f64 {
        self.iq((qx * qx + qy * qy).sqrt())
    }

    fn iq_grid(&self, q: &[f64]) -> Vec<f64> {
        q.iter().map(|&q| self.iq(q)).collect()
    }

    /// Outermost radius reached by the kernel.
    fn effective_radius(&self) -> f64;
}

pub(crate) fn unknown_parameter(model: &'static str, name: &str) -> ParameterError {
    ParameterError::Unknown {
        model,
        name: name.to_string(),
    }
}
