//! Multi-shell sphere: a core of radius `core_radius` wrapped in `n_pairs`
//! shell/water pairs. Same stack as the multilayer vesicle but with an
//! explicit core density and no volume-fraction prefactor.

use super::shell_stack::{ShellGeometry, shell_stack_intensity};
use super::{ParameterError, ParameterInfo, ScatteringModel, unknown_parameter};
use serde::{Deserialize, Serialize};

pub const MODEL_NAME: &str = "multi_shell";

const PARAMETERS: [ParameterInfo; 6] = [
    ParameterInfo::new(
        "core_radius",
        "Ang",
        60.0,
        [0.0, f64::INFINITY],
        "core radius",
    ),
    ParameterInfo::new(
        "s_thickness",
        "Ang",
        10.0,
        [0.0, f64::INFINITY],
        "shell thickness",
    ),
    ParameterInfo::new(
        "w_thickness",
        "Ang",
        10.0,
        [0.0, f64::INFINITY],
        "water thickness",
    ),
    ParameterInfo::new(
        "core_sld",
        "1e-6/Ang^2",
        6.4,
        [f64::NEG_INFINITY, f64::INFINITY],
        "core scattering length density",
    ),
    ParameterInfo::new(
        "shell_sld",
        "1e-6/Ang^2",
        0.4,
        [f64::NEG_INFINITY, f64::INFINITY],
        "shell scattering length density",
    ),
    ParameterInfo::count(
        "n_pairs",
        2.0,
        [1.0, f64::INFINITY],
        "number of shell plus water pairs",
    ),
];

pub fn iq(
    q: f64,
    core_radius: f64,
    s_thickness: f64,
    w_thickness: f64,
    core_sld: f64,
    shell_sld: f64,
    n_pairs: f64,
) -> f64 {
    let geometry = ShellGeometry::new(core_radius, s_thickness, w_thickness);
    shell_stack_intensity(q, geometry, core_sld - shell_sld, n_pairs, 1.0)
}

#[allow(clippy::too_many_arguments)]
pub fn iqxy(
    qx: f64,
    qy: f64,
    core_radius: f64,
    s_thickness: f64,
    w_thickness: f64,
    core_sld: f64,
    shell_sld: f64,
    n_pairs: f64,
) -> f64 {
    let q = (qx * qx + qy * qy).sqrt();
    iq(
        q,
        core_radius,
        s_thickness,
        w_thickness,
        core_sld,
        shell_sld,
        n_pairs,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultiShell {
    pub core_radius: f64,
    pub s_thickness: f64,
    pub w_thickness: f64,
    pub core_sld: f64,
    pub shell_sld: f64,
    pub n_pairs: f64,
}

impl Default for MultiShell {
    fn default() -> Self {
        Self {
            core_radius: PARAMETERS[0].default,
            s_thickness: PARAMETERS[1].default,
            w_thickness: PARAMETERS[2].default,
            core_sld: PARAMETERS[3].default,
            shell_sld: PARAMETERS[4].default,
            n_pairs: PARAMETERS[5].default,
        }
    }
}

impl ScatteringModel for MultiShell {
    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn parameter_info(&self) -> &'static [ParameterInfo] {
        &PARAMETERS
    }

    fn parameter_values(&self) -> Vec<f64> {
        vec![
            self.core_radius,
            self.s_thickness,
            self.w_thickness,
            self.core_sld,
            self.shell_sld,
            self.n_pairs,
        ]
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        let slot = match name {
            "core_radius" => &mut self.core_radius,
            "s_thickness" => &mut self.s_thickness,
            "w_thickness" => &mut self.w_thickness,
            "core_sld" => &mut self.core_sld,
            "shell_sld" => &mut self.shell_sld,
            "n_pairs" => &mut self.n_pairs,
            _ => return Err(unknown_parameter(MODEL_NAME, name)),
        };
        *slot = value;
        Ok(())
    }

    fn iq(&self, q: f64) -> f64 {
        iq(
            q,
            self.core_radius,
            self.s_thickness,
            self.w_thickness,
            self.core_sld,
            self.shell_sld,
            self.n_pairs,
        )
    }

    fn effective_radius(&self) -> f64 {
        ShellGeometry::new(self.core_radius, self.s_thickness, self.w_thickness)
            .outer_radius(self.n_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::{MultiShell, iq, iqxy};
    use crate::models::{ScatteringModel, multilayer_vesicle};

    #[test]
    fn matches_vesicle_at_unit_volume_fraction() {
        for q in [0.0, 1.0e-3, 0.05, 0.7] {
            for n_pairs in [1.0, 2.0, 5.0] {
                let shell = iq(q, 60.0, 10.0, 5.0, 6.3, 1.0, n_pairs);
                let vesicle =
                    multilayer_vesicle::iq(q, 1.0, 60.0, 10.0, 5.0, 6.3, 1.0, n_pairs);
                assert_eq!(shell.to_bits(), vesicle.to_bits(), "q={q} n_pairs={n_pairs}");
            }
        }
    }

    #[test]
    fn oriented_form_uses_magnitude() {
        assert_eq!(
            iqxy(0.03, 0.04, 60.0, 10.0, 10.0, 6.4, 0.4, 2.0).to_bits(),
            iq(0.05, 60.0, 10.0, 10.0, 6.4, 0.4, 2.0).to_bits()
        );
    }

    #[test]
    fn effective_radius_counts_visited_pairs() {
        let model = MultiShell {
            n_pairs: 3.0,
            ..MultiShell::default()
        };
        assert_eq!(model.effective_radius(), 110.0);
        assert_eq!(model.name(), "multi_shell");
    }
}
