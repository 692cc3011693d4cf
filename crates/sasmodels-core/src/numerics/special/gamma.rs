use super::coefficients::{LANCZOS_SERIES, LANCZOS_SERIES_SEED, LANCZOS_SQRT_TWO_PI};

/// Lanczos approximation (g = 5, six terms) to `ln Gamma(x)` for `x > 0`.
///
/// Relative error is below about `2e-10` over the positive axis.
pub fn ln_gamma_lanczos(x: f64) -> f64 {
    let mut tmp = x + 5.5;
    tmp -= (x + 0.5) * tmp.ln();

    let mut y = x;
    let mut series = LANCZOS_SERIES_SEED;
    for coefficient in LANCZOS_SERIES {
        y += 1.0;
        series += coefficient / y;
    }

    -tmp + (LANCZOS_SQRT_TWO_PI * series / x).ln()
}
