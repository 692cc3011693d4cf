//! Multilamellar vesicle: a solvent core surrounded by `n_pairs` shells of
//! material separated by solvent layers.
//!
//! ```text
//! P(q) = phi / V(R_N) * [ sum_i (rho_solvent - rho) (V(r_i) F(q r_i) - V(r_i + t_s) F(q (r_i + t_s))) ]^2
//! r_i  = R + i (t_s + t_w)
//! ```
//!
//! with `F(x) = 3 j1(x)/x`, `V(r) = 4 pi r^3 / 3` and `R_N` the outermost
//! shell radius. Any `n_pairs` below 2 yields a single bilayer (unilamellar
//! vesicle).

use super::shell_stack::{ShellGeometry, shell_stack_intensity};
use super::{ParameterError, ParameterInfo, ScatteringModel, unknown_parameter};
use serde::{Deserialize, Serialize};

pub const MODEL_NAME: &str = "multilayer_vesicle";

const PARAMETERS: [ParameterInfo; 7] = [
    ParameterInfo::new(
        "volfraction",
        "",
        0.05,
        [0.0, 1.0],
        "volume fraction of vesicles",
    ),
    ParameterInfo::new(
        "radius",
        "Ang",
        60.0,
        [0.0, f64::INFINITY],
        "radius of solvent filled core",
    ),
    ParameterInfo::new(
        "thick_shell",
        "Ang",
        10.0,
        [0.0, f64::INFINITY],
        "thickness of one shell",
    ),
    ParameterInfo::new(
        "thick_solvent",
        "Ang",
        10.0,
        [0.0, f64::INFINITY],
        "solvent thickness between shells",
    ),
    ParameterInfo::new(
        "sld_solvent",
        "1e-6/Ang^2",
        6.4,
        [f64::NEG_INFINITY, f64::INFINITY],
        "solvent scattering length density",
    ),
    ParameterInfo::new(
        "sld",
        "1e-6/Ang^2",
        0.4,
        [f64::NEG_INFINITY, f64::INFINITY],
        "shell scattering length density",
    ),
    ParameterInfo::count(
        "n_pairs",
        2.0,
        [1.0, f64::INFINITY],
        "number of shell plus solvent layer pairs",
    ),
];

/// `I(q)` for a scalar scattering vector magnitude.
#[allow(clippy::too_many_arguments)]
pub fn iq(
    q: f64,
    volfraction: f64,
    radius: f64,
    thick_shell: f64,
    thick_solvent: f64,
    sld_solvent: f64,
    sld: f64,
    n_pairs: f64,
) -> f64 {
    kernel(
        q,
        volfraction,
        radius,
        thick_shell,
        thick_solvent,
        sld_solvent,
        sld,
        n_pairs,
    )
}

/// `I(qx, qy)`; the model is isotropic so only `|q|` matters.
#[allow(clippy::too_many_arguments)]
pub fn iqxy(
    qx: f64,
    qy: f64,
    volfraction: f64,
    radius: f64,
    thick_shell: f64,
    thick_solvent: f64,
    sld_solvent: f64,
    sld: f64,
    n_pairs: f64,
) -> f64 {
    let q = (qx * qx + qy * qy).sqrt();
    kernel(
        q,
        volfraction,
        radius,
        thick_shell,
        thick_solvent,
        sld_solvent,
        sld,
        n_pairs,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn kernel(
    q: f64,
    volfraction: f64,
    radius: f64,
    thick_shell: f64,
    thick_solvent: f64,
    sld_solvent: f64,
    sld: f64,
    n_pairs: f64,
) -> f64 {
    let contrast = sld_solvent - sld;
    let geometry = ShellGeometry::new(radius, thick_shell, thick_solvent);
    shell_stack_intensity(q, geometry, contrast, n_pairs, volfraction)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultilayerVesicle {
    pub volfraction: f64,
    pub radius: f64,
    pub thick_shell: f64,
    pub thick_solvent: f64,
    pub sld_solvent: f64,
    pub sld: f64,
    pub n_pairs: f64,
}

impl Default for MultilayerVesicle {
    fn default() -> Self {
        Self {
            volfraction: PARAMETERS[0].default,
            radius: PARAMETERS[1].default,
            thick_shell: PARAMETERS[2].default,
            thick_solvent: PARAMETERS[3].default,
            sld_solvent: PARAMETERS[4].default,
            sld: PARAMETERS[5].default,
            n_pairs: PARAMETERS[6].default,
        }
    }
}

impl MultilayerVesicle {
    pub fn geometry(&self) -> ShellGeometry {
        ShellGeometry::new(self.radius, self.thick_shell, self.thick_solvent)
    }
}

impl ScatteringModel for MultilayerVesicle {
    fn name(&self) -> &'static str {
        MODEL_NAME
    }

    fn parameter_info(&self) -> &'static [ParameterInfo] {
        &PARAMETERS
    }

    fn parameter_values(&self) -> Vec<f64> {
        vec![
            self.volfraction,
            self.radius,
            self.thick_shell,
            self.thick_solvent,
            self.sld_solvent,
            self.sld,
            self.n_pairs,
        ]
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        let slot = match name {
            "volfraction" => &mut self.volfraction,
            "radius" => &mut self.radius,
            "thick_shell" => &mut self.thick_shell,
            "thick_solvent" => &mut self.thick_solvent,
            "sld_solvent" => &mut self.sld_solvent,
            "sld" => &mut self.sld,
            "n_pairs" => &mut self.n_pairs,
            _ => return Err(unknown_parameter(MODEL_NAME, name)),
        };
        *slot = value;
        Ok(())
    }

    fn iq(&self, q: f64) -> f64 {
        iq(
            q,
            self.volfraction,
            self.radius,
            self.thick_shell,
            self.thick_solvent,
            self.sld_solvent,
            self.sld,
            self.n_pairs,
        )
    }

    fn effective_radius(&self) -> f64 {
        self.geometry().outer_radius(self.n_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::{MultilayerVesicle, iq, iqxy, kernel};
    use crate::models::ScatteringModel;
    use crate::models::shell_stack::{ShellGeometry, shell_stack_accumulate};

    fn reference(q: f64, n_pairs: f64) -> f64 {
        iq(q, 0.05, 60.0, 10.0, 5.0, 6.3, 1.0, n_pairs)
    }

    #[test]
    fn shell_counts_below_two_collapse_to_one_bilayer() {
        let unilamellar = reference(0.05, 1.0);
        for n_pairs in [0.0, -5.0, 0.999, 1.5, f64::NAN] {
            assert_eq!(
                reference(0.05, n_pairs).to_bits(),
                unilamellar.to_bits(),
                "n_pairs={n_pairs}"
            );
        }
    }

    #[test]
    fn each_extra_pair_adds_exactly_one_shell() {
        let geometry = ShellGeometry::new(60.0, 10.0, 5.0);
        let contrast = 6.3 - 1.0;
        for q in [1.0e-3, 0.05, 0.3] {
            for k in 1..=5_usize {
                let mut accumulator = shell_stack_accumulate(q, geometry, contrast, k as f64);
                accumulator.add_pair(q, contrast, geometry.pair(k));
                assert_eq!(
                    reference(q, (k + 1) as f64).to_bits(),
                    accumulator.finish(0.05).to_bits(),
                    "q={q} k={k}"
                );
            }
        }
        assert_eq!(reference(0.05, 2.9).to_bits(), reference(0.05, 2.0).to_bits());
    }

    #[test]
    fn iqxy_reduces_to_magnitude() {
        for (qx, qy) in [(0.0_f64, 0.0_f64), (0.003, 0.004), (-0.05, 0.12), (0.2, -0.0)] {
            let q = (qx * qx + qy * qy).sqrt();
            assert_eq!(
                iqxy(qx, qy, 0.05, 60.0, 10.0, 5.0, 6.3, 1.0, 3.0).to_bits(),
                iq(q, 0.05, 60.0, 10.0, 5.0, 6.3, 1.0, 3.0).to_bits()
            );
        }
    }

    #[test]
    fn matching_densities_give_exact_zero() {
        for q in [0.0, 1.0e-3, 0.1, 2.5] {
            assert_eq!(kernel(q, 0.05, 60.0, 10.0, 5.0, 3.2, 3.2, 4.0), 0.0);
        }
    }

    #[test]
    fn intensity_scales_linearly_with_volume_fraction() {
        let base = iq(0.02, 0.05, 60.0, 10.0, 5.0, 6.3, 1.0, 2.0);
        let doubled = iq(0.02, 0.10, 60.0, 10.0, 5.0, 6.3, 1.0, 2.0);
        assert!((doubled / base - 2.0).abs() < 1.0e-14);
    }

    #[test]
    fn model_struct_delegates_to_free_functions() {
        let model = MultilayerVesicle {
            thick_solvent: 5.0,
            sld_solvent: 6.3,
            sld: 1.0,
            n_pairs: 3.0,
            ..MultilayerVesicle::default()
        };
        assert_eq!(
            model.iq(0.01).to_bits(),
            iq(0.01, 0.05, 60.0, 10.0, 5.0, 6.3, 1.0, 3.0).to_bits()
        );
        assert_eq!(model.iqxy(0.006, 0.008).to_bits(), model.iq(0.01).to_bits());
        assert_eq!(model.effective_radius(), 100.0);
    }

    #[test]
    fn set_parameter_rejects_unknown_names() {
        let mut model = MultilayerVesicle::default();
        model.set_parameter("n_pairs", 5.0).expect("known parameter");
        assert_eq!(model.n_pairs, 5.0);
        let error = model
            .set_parameter("thickness", 1.0)
            .expect_err("unknown parameter");
        assert!(error.to_string().contains("thickness"));
    }
}
