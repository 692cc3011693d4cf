pub mod approximation;
pub mod bessel;
pub mod coefficients;
pub mod gamma;
pub mod spherical;

pub use approximation::{Cutoff, Reflection, Regime, RegimeSplitApproximation};
pub use bessel::{
    J0, J0_COMPACT, J1, J1_COMPACT, Y0, bessel_j0, bessel_j0_compact, bessel_j1,
    bessel_j1_compact, bessel_y0, two_j1x_over_x,
};
pub use gamma::ln_gamma_lanczos;
pub use spherical::{SPH_J1C, SPH_J1C_CUTOFF, sph_j1c};

/// Special functions addressable by name, e.g. from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialFunction {
    J0,
    J1,
    Y0,
    J0Compact,
    J1Compact,
    SphJ1c,
    TwoJ1xOverX,
    LnGamma,
}

impl SpecialFunction {
    pub const ALL: [SpecialFunction; 8] = [
        Self::J0,
        Self::J1,
        Self::Y0,
        Self::J0Compact,
        Self::J1Compact,
        Self::SphJ1c,
        Self::TwoJ1xOverX,
        Self::LnGamma,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::J0 => "j0",
            Self::J1 => "j1",
            Self::Y0 => "y0",
            Self::J0Compact => "j0-compact",
            Self::J1Compact => "j1-compact",
            Self::SphJ1c => "sph-j1c",
            Self::TwoJ1xOverX => "2j1x-x",
            Self::LnGamma => "ln-gamma",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// The regime split behind this function, if it has one.
    pub const fn approximation(self) -> Option<RegimeSplitApproximation> {
        match self {
            Self::J0 => Some(J0),
            Self::J1 => Some(J1),
            Self::Y0 => Some(Y0),
            Self::J0Compact => Some(J0_COMPACT),
            Self::J1Compact => Some(J1_COMPACT),
            Self::SphJ1c => Some(SPH_J1C),
            Self::TwoJ1xOverX | Self::LnGamma => None,
        }
    }

    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            Self::J0 => bessel_j0(x),
            Self::J1 => bessel_j1(x),
            Self::Y0 => bessel_y0(x),
            Self::J0Compact => bessel_j0_compact(x),
            Self::J1Compact => bessel_j1_compact(x),
            Self::SphJ1c => sph_j1c(x),
            Self::TwoJ1xOverX => two_j1x_over_x(x),
            Self::LnGamma => ln_gamma_lanczos(x),
        }
    }
}

impl std::fmt::Display for SpecialFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
