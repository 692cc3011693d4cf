//! Cylindrical Bessel functions of integer order from fitted rational and
//! asymptotic approximations.
//!
//! The full approximations split at `|x| = 5`: a rational fit in `x^2`
//! scaled by the leading zeros below, and the Hankel asymptotic form
//! `sqrt(2/(pi x)) (P cos(xn) - (5/x) Q sin(xn))` above. The compact
//! approximations split at `|x| = 2` and use a modulus/phase form above.

use super::approximation::{Cutoff, Reflection, RegimeSplitApproximation};
use super::coefficients::{
    J0_COMPACT_MODULUS, J0_COMPACT_PHASE, J0_COMPACT_SERIES, J0_HANKEL_P_DENOMINATOR,
    J0_HANKEL_P_NUMERATOR, J0_HANKEL_Q_DENOMINATOR, J0_HANKEL_Q_NUMERATOR,
    J0_RATIONAL_DENOMINATOR, J0_RATIONAL_NUMERATOR, J1_COMPACT_MODULUS, J1_COMPACT_PHASE,
    J1_COMPACT_SERIES, J1_HANKEL_P_DENOMINATOR, J1_HANKEL_P_NUMERATOR, J1_HANKEL_Q_DENOMINATOR,
    J1_HANKEL_Q_NUMERATOR, J1_RATIONAL_DENOMINATOR, J1_RATIONAL_NUMERATOR,
    Y0_RATIONAL_DENOMINATOR, Y0_RATIONAL_NUMERATOR,
};
use crate::numerics::polynomial::{MonicPolynomial, Polynomial};

/// First two zeros of J0, squared.
const J0_ZERO1_SQUARED: f64 = 5.78318596294678452118E0;
const J0_ZERO2_SQUARED: f64 = 3.04712623436620863991E1;
/// First two zeros of J1, squared.
const J1_ZERO1_SQUARED: f64 = 1.46819706421238932572E1;
const J1_ZERO2_SQUARED: f64 = 4.92184563216946036703E1;

const SQRT_TWO_OVER_PI: f64 = 7.9788456080286535587989E-1;
const TWO_OVER_PI: f64 = 6.36619772367581343075535E-1;
const PI_OVER_FOUR: f64 = 7.85398163397448309616E-1;
const THREE_PI_OVER_FOUR: f64 = 2.35619449019234492885;

const FULL_CUTOFF: f64 = 5.0;
const COMPACT_CUTOFF: f64 = 2.0;
const J0_TINY_ARGUMENT: f64 = 1.0e-5;
const J0_COMPACT_TINY_ARGUMENT: f64 = 1.0e-3;

const J0_RATIONAL: (Polynomial, MonicPolynomial) = (
    Polynomial::new(&J0_RATIONAL_NUMERATOR, 3),
    MonicPolynomial::new(&J0_RATIONAL_DENOMINATOR, 8),
);
const J1_RATIONAL: (Polynomial, MonicPolynomial) = (
    Polynomial::new(&J1_RATIONAL_NUMERATOR, 3),
    MonicPolynomial::new(&J1_RATIONAL_DENOMINATOR, 8),
);
const Y0_RATIONAL: (Polynomial, MonicPolynomial) = (
    Polynomial::new(&Y0_RATIONAL_NUMERATOR, 7),
    MonicPolynomial::new(&Y0_RATIONAL_DENOMINATOR, 7),
);

/// Rational amplitudes of the Hankel expansion shared by one order.
#[derive(Debug, Clone, Copy)]
struct HankelAmplitudes {
    p_numerator: Polynomial,
    p_denominator: Polynomial,
    q_numerator: Polynomial,
    q_denominator: MonicPolynomial,
}

impl HankelAmplitudes {
    fn evaluate(&self, z: f64) -> (f64, f64) {
        let p = self.p_numerator.evaluate(z) / self.p_denominator.evaluate(z);
        let q = self.q_numerator.evaluate(z) / self.q_denominator.evaluate(z);
        (p, q)
    }
}

const ORDER_ZERO_HANKEL: HankelAmplitudes = HankelAmplitudes {
    p_numerator: Polynomial::new(&J0_HANKEL_P_NUMERATOR, 6),
    p_denominator: Polynomial::new(&J0_HANKEL_P_DENOMINATOR, 6),
    q_numerator: Polynomial::new(&J0_HANKEL_Q_NUMERATOR, 7),
    q_denominator: MonicPolynomial::new(&J0_HANKEL_Q_DENOMINATOR, 7),
};

const ORDER_ONE_HANKEL: HankelAmplitudes = HankelAmplitudes {
    p_numerator: Polynomial::new(&J1_HANKEL_P_NUMERATOR, 6),
    p_denominator: Polynomial::new(&J1_HANKEL_P_DENOMINATOR, 6),
    q_numerator: Polynomial::new(&J1_HANKEL_Q_NUMERATOR, 7),
    q_denominator: MonicPolynomial::new(&J1_HANKEL_Q_DENOMINATOR, 7),
};

/// Modulus/phase pair of a compact approximation.
#[derive(Debug, Clone, Copy)]
struct CompactAsymptote {
    modulus: Polynomial,
    phase: Polynomial,
    phase_offset: f64,
}

impl CompactAsymptote {
    fn evaluate(&self, x: f64) -> f64 {
        let q = 1.0 / x;
        let w = q.sqrt();
        let p = w * self.modulus.evaluate(q);
        let w = q * q;
        let xn = q * self.phase.evaluate(w) - self.phase_offset;
        p * (xn + x).cos()
    }
}

const J0_COMPACT_ASYMPTOTE: CompactAsymptote = CompactAsymptote {
    modulus: Polynomial::new(&J0_COMPACT_MODULUS, 7),
    phase: Polynomial::new(&J0_COMPACT_PHASE, 7),
    phase_offset: PI_OVER_FOUR,
};

const J1_COMPACT_ASYMPTOTE: CompactAsymptote = CompactAsymptote {
    modulus: Polynomial::new(&J1_COMPACT_MODULUS, 7),
    phase: Polynomial::new(&J1_COMPACT_PHASE, 7),
    phase_offset: THREE_PI_OVER_FOUR,
};

pub const J0: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "j0",
    Cutoff::AtOrBelow(FULL_CUTOFF),
    Reflection::Even,
    j0_rational,
    j0_hankel,
);

pub const J1: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "j1",
    Cutoff::AtOrBelow(FULL_CUTOFF),
    Reflection::Odd,
    j1_rational,
    j1_hankel,
);

pub const Y0: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "y0",
    Cutoff::AtOrBelow(FULL_CUTOFF),
    Reflection::Direct,
    y0_rational,
    y0_hankel,
);

pub const J0_COMPACT: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "j0-compact",
    Cutoff::AtOrBelow(COMPACT_CUTOFF),
    Reflection::Even,
    j0_compact_series,
    j0_compact_asymptote,
);

pub const J1_COMPACT: RegimeSplitApproximation = RegimeSplitApproximation::new(
    "j1-compact",
    Cutoff::AtOrBelow(COMPACT_CUTOFF),
    Reflection::Odd,
    j1_compact_series,
    j1_compact_asymptote,
);

pub fn bessel_j0(x: f64) -> f64 {
    J0.evaluate(x)
}

pub fn bessel_j1(x: f64) -> f64 {
    J1.evaluate(x)
}

/// Bessel function of the second kind, order zero. Defined for `x > 0`;
/// zero gives `-inf` and negative arguments give NaN.
pub fn bessel_y0(x: f64) -> f64 {
    Y0.evaluate(x)
}

/// Reduced-table J0, accurate to roughly single precision.
pub fn bessel_j0_compact(x: f64) -> f64 {
    J0_COMPACT.evaluate(x)
}

/// Reduced-table J1, accurate to roughly single precision.
pub fn bessel_j1_compact(x: f64) -> f64 {
    J1_COMPACT.evaluate(x)
}

/// `2 J1(x) / x`, the form factor amplitude of a thin disc; 1 at the origin.
pub fn two_j1x_over_x(x: f64) -> f64 {
    if x != 0.0 { 2.0 * bessel_j1(x) / x } else { 1.0 }
}

fn j0_rational(x: f64) -> f64 {
    let z = x * x;
    if x < J0_TINY_ARGUMENT {
        return 1.0 - z / 4.0;
    }

    let p = (z - J0_ZERO1_SQUARED) * (z - J0_ZERO2_SQUARED);
    let (numerator, denominator) = J0_RATIONAL;
    p * numerator.evaluate(z) / denominator.evaluate(z)
}

fn j0_hankel(x: f64) -> f64 {
    let w = 5.0 / x;
    let z = 25.0 / (x * x);
    let (p, q) = ORDER_ZERO_HANKEL.evaluate(z);
    let xn = x - PI_OVER_FOUR;
    let (sin_xn, cos_xn) = xn.sin_cos();
    let p = p * cos_xn - w * q * sin_xn;
    p * SQRT_TWO_OVER_PI / x.sqrt()
}

fn j1_rational(x: f64) -> f64 {
    let z = x * x;
    let (numerator, denominator) = J1_RATIONAL;
    let w = numerator.evaluate(z) / denominator.evaluate(z);
    w * x * (z - J1_ZERO1_SQUARED) * (z - J1_ZERO2_SQUARED)
}

fn j1_hankel(x: f64) -> f64 {
    let w = 5.0 / x;
    let z = w * w;
    let (p, q) = ORDER_ONE_HANKEL.evaluate(z);
    let xn = x - THREE_PI_OVER_FOUR;
    let (sin_xn, cos_xn) = xn.sin_cos();
    let p = p * cos_xn - w * q * sin_xn;
    p * SQRT_TWO_OVER_PI / x.sqrt()
}

fn y0_rational(x: f64) -> f64 {
    let z = x * x;
    let (numerator, denominator) = Y0_RATIONAL;
    let w = numerator.evaluate(z) / denominator.evaluate(z);
    w + TWO_OVER_PI * x.ln() * bessel_j0(x)
}

fn y0_hankel(x: f64) -> f64 {
    let w = 5.0 / x;
    let z = 25.0 / (x * x);
    let (p, q) = ORDER_ZERO_HANKEL.evaluate(z);
    let xn = x - PI_OVER_FOUR;
    let (sin_xn, cos_xn) = xn.sin_cos();
    let p = p * sin_xn + w * q * cos_xn;
    p * SQRT_TWO_OVER_PI / x.sqrt()
}

fn j0_compact_series(x: f64) -> f64 {
    let z = x * x;
    if x < J0_COMPACT_TINY_ARGUMENT {
        return 1.0 - 0.25 * z;
    }

    (z - J0_ZERO1_SQUARED) * Polynomial::new(&J0_COMPACT_SERIES, 4).evaluate(z)
}

fn j0_compact_asymptote(x: f64) -> f64 {
    J0_COMPACT_ASYMPTOTE.evaluate(x)
}

fn j1_compact_series(x: f64) -> f64 {
    let z = x * x;
    (z - J1_ZERO1_SQUARED) * x * Polynomial::new(&J1_COMPACT_SERIES, 4).evaluate(z)
}

fn j1_compact_asymptote(x: f64) -> f64 {
    J1_COMPACT_ASYMPTOTE.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::{
        J0, J0_COMPACT, J1, J1_COMPACT, Y0, bessel_j0, bessel_j0_compact, bessel_j1,
        bessel_j1_compact, bessel_y0, two_j1x_over_x,
    };
    use crate::numerics::special::Regime;

    struct ReferenceCase {
        label: &'static str,
        function: fn(f64) -> f64,
        expected: &'static [(f64, f64)],
        abs_tol: f64,
    }

    // mpmath at 40 digits.
    const J0_REFERENCE: [(f64, f64); 10] = [
        (1e-06, 0.99999999999975),
        (0.5, 0.9384698072408129),
        (2.0, 0.22389077914123567),
        (4.75, -0.25512082749137394),
        (5.0, -0.1775967713143383),
        (5.25, -0.09308098963931788),
        (8.0, 0.1716508071375539),
        (12.5, 0.1468840547004211),
        (30.0, -0.08636798358104021),
        (100.0, 0.019985850304223122),
    ];

    const J1_REFERENCE: [(f64, f64); 10] = [
        (1e-06, 4.999999999999375e-07),
        (0.5, 0.2422684576748739),
        (2.0, 0.5767248077568734),
        (4.75, -0.2891867986471104),
        (5.0, -0.32757913759146523),
        (5.25, -0.34501397857943766),
        (8.0, 0.23463634685391463),
        (12.5, -0.16548380461475973),
        (30.0, -0.11875106261662294),
        (100.0, -0.07714535201411216),
    ];

    const Y0_REFERENCE: [(f64, f64); 10] = [
        (1e-06, -8.869031481659444),
        (0.5, -0.44451873350670656),
        (2.0, 0.5103756726497451),
        (4.75, -0.2612325032349756),
        (5.0, -0.30851762524903376),
        (5.25, -0.33477723515498115),
        (8.0, 0.22352148938756622),
        (12.5, -0.1712143068446693),
        (30.0, -0.11729573168666403),
        (100.0, -0.07724431336508315),
    ];

    #[test]
    fn full_tables_match_high_precision_references() {
        let cases = [
            ReferenceCase {
                label: "j0",
                function: bessel_j0,
                expected: &J0_REFERENCE,
                abs_tol: 2.0e-15,
            },
            ReferenceCase {
                label: "j1",
                function: bessel_j1,
                expected: &J1_REFERENCE,
                abs_tol: 2.0e-15,
            },
            ReferenceCase {
                label: "y0",
                function: bessel_y0,
                expected: &Y0_REFERENCE,
                abs_tol: 4.0e-15,
            },
        ];

        for case in cases {
            for &(x, expected) in case.expected {
                let actual = (case.function)(x);
                assert!(
                    (actual - expected).abs() <= case.abs_tol,
                    "{} x={x} expected={expected:e} actual={actual:e}",
                    case.label
                );
            }
        }
    }

    #[test]
    fn compact_tables_track_full_tables_to_single_precision() {
        for x in [1.0e-4, 0.3, 1.0, 1.999, 2.0, 2.001, 3.5, 7.0, 20.0, 150.0] {
            let j0_diff = (bessel_j0_compact(x) - bessel_j0(x)).abs();
            let j1_diff = (bessel_j1_compact(x) - bessel_j1(x)).abs();
            assert!(j0_diff < 2.0e-8, "j0 x={x} diff={j0_diff:e}");
            assert!(j1_diff < 2.0e-8, "j1 x={x} diff={j1_diff:e}");
        }
    }

    #[test]
    fn regime_boundaries_follow_cutoffs() {
        for approximation in [J0, J1, Y0] {
            assert_eq!(approximation.regime(5.0), Regime::SmallArgument);
            assert_eq!(approximation.regime(5.0 + 1.0e-12), Regime::LargeArgument);
        }
        for approximation in [J0_COMPACT, J1_COMPACT] {
            assert_eq!(approximation.regime(2.0), Regime::SmallArgument);
            assert_eq!(approximation.regime(-2.5), Regime::LargeArgument);
        }
        assert_eq!(Y0.regime(-100.0), Regime::SmallArgument);
    }

    #[test]
    fn branches_agree_near_the_split() {
        for (approximation, cutoff, tolerance) in [
            (J0, 5.0, 1.0e-15),
            (J1, 5.0, 1.0e-15),
            (Y0, 5.0, 2.0e-15),
            (J0_COMPACT, 2.0, 2.0e-8),
            (J1_COMPACT, 2.0, 2.0e-8),
        ] {
            let small = approximation.evaluate_regime(Regime::SmallArgument, cutoff);
            let large = approximation.evaluate_regime(Regime::LargeArgument, cutoff);
            assert!(
                (small - large).abs() < tolerance,
                "{} small={small:e} large={large:e}",
                approximation.name()
            );
        }
    }

    #[test]
    fn reflection_symmetries_hold() {
        for x in [0.25, 3.0, 5.0, 9.5, 42.0] {
            assert_eq!(bessel_j0(-x), bessel_j0(x));
            assert_eq!(bessel_j1(-x), -bessel_j1(x));
            assert_eq!(bessel_j0_compact(-x), bessel_j0_compact(x));
            assert_eq!(bessel_j1_compact(-x), -bessel_j1_compact(x));
        }
    }

    #[test]
    fn tiny_arguments_use_leading_series_terms() {
        assert_eq!(bessel_j0(0.0), 1.0);
        assert_eq!(bessel_j1(0.0), 0.0);
        let x: f64 = 1.0e-6;
        assert_eq!(bessel_j0(x), 1.0 - x * x / 4.0);
        let x: f64 = 1.0e-4;
        assert_eq!(bessel_j0_compact(x), 1.0 - 0.25 * (x * x));
    }

    #[test]
    fn y0_is_singular_at_origin_and_undefined_for_negative_arguments() {
        assert_eq!(bessel_y0(0.0), f64::NEG_INFINITY);
        assert!(bessel_y0(-1.0).is_nan());
        assert!(bessel_y0(-10.0).is_nan());
    }

    #[test]
    fn two_j1x_over_x_is_unity_at_origin_and_even() {
        assert_eq!(two_j1x_over_x(0.0), 1.0);
        assert!((two_j1x_over_x(1.0e-6) - 1.0).abs() < 1.0e-12);
        assert_eq!(two_j1x_over_x(-3.0), two_j1x_over_x(3.0));
        assert!((two_j1x_over_x(2.0) - 2.0 * 0.5767248077568734 / 2.0).abs() < 1.0e-15);
    }

    #[test]
    fn nan_propagates() {
        assert!(bessel_j0(f64::NAN).is_nan());
        assert!(bessel_j1(f64::NAN).is_nan());
        assert!(two_j1x_over_x(f64::NAN).is_nan());
    }
}
