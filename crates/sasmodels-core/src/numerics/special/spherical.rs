//! Normalized spherical Bessel amplitude `3 j1(x) / x` of a uniform sphere.

use super::approximation::{Cutoff, Reflection, RegimeSplitApproximation};
use super::coefficients::SPH_J1C_TAYLOR;
use crate::numerics::polynomial::Polynomial;

/// Below this argument the trigonometric form loses digits to cancellation
/// and the Taylor series is exact to double precision.
pub const SPH_J1C_CUTOFF: f64 = 0.18;

const TAYLOR: Polynomial = Polynomial::new(&SPH_J1C_TAYLOR, 4);

pub const SPH_J1C: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "sph-j1c",
    Cutoff::Below(SPH_J1C_CUTOFF),
    Reflection::Direct,
    sph_j1c_taylor,
    sph_j1c_trigonometric,
);

/// `3 j1(x)/x = 3 (sin x - x cos x) / x^3`, equal to 1 at the origin.
pub fn sph_j1c(x: f64) -> f64 {
    SPH_J1C.evaluate(x)
}

fn sph_j1c_taylor(x: f64) -> f64 {
    TAYLOR.evaluate(x * x)
}

fn sph_j1c_trigonometric(x: f64) -> f64 {
    let x2 = x * x;
    let (sin_x, cos_x) = x.sin_cos();
    3.0 * (sin_x / x - cos_x) / x2
}

#[cfg(test)]
mod tests {
    use super::{SPH_J1C, SPH_J1C_CUTOFF, sph_j1c};
    use crate::numerics::special::Regime;

    #[test]
    fn unity_at_origin() {
        assert_eq!(sph_j1c(0.0), 1.0);
    }

    #[test]
    fn taylor_branch_matches_nested_series_expression() {
        let x: f64 = 0.1;
        let x2 = x * x;
        let nested = 1.0
            + x2 * (-3. / 30. + x2 * (3. / 840. + x2 * (-3. / 45360. + x2 * (3. / 3991680.))));
        assert_eq!(sph_j1c(x).to_bits(), nested.to_bits());
    }

    #[test]
    fn cutoff_is_exclusive() {
        assert_eq!(SPH_J1C.regime(SPH_J1C_CUTOFF), Regime::LargeArgument);
        assert_eq!(SPH_J1C.regime(0.179_999), Regime::SmallArgument);
        assert_eq!(SPH_J1C.regime(-4.0), Regime::SmallArgument);
    }

    #[test]
    fn branches_agree_at_cutoff() {
        let taylor = SPH_J1C.evaluate_regime(Regime::SmallArgument, SPH_J1C_CUTOFF);
        let trig = SPH_J1C.evaluate_regime(Regime::LargeArgument, SPH_J1C_CUTOFF);
        assert!((taylor - trig).abs() < 1.0e-13, "taylor={taylor} trig={trig}");
    }

    #[test]
    fn first_zero_sits_at_tan_x_equals_x() {
        // smallest positive root of tan(x) = x
        let root = 4.493_409_457_909_064;
        assert!(sph_j1c(root).abs() < 1.0e-14);
        assert!(sph_j1c(root - 0.01) > 0.0);
        assert!(sph_j1c(root + 0.01) < 0.0);
    }
}
