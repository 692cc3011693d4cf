//! Horner evaluation over coefficient tables stored highest power first.
//!
//! Both evaluators read only the table entries that exist: a degree larger
//! than the table allows is truncated to the stored coefficients instead of
//! reading out of bounds. Callers are expected to pass matching degrees.

/// Evaluates `c[0] x^N + c[1] x^(N-1) + ... + c[N]`.
pub fn evaluate_polynomial(x: f64, coefficients: &[f64], degree: usize) -> f64 {
    let mut terms = coefficients.iter().take(degree.saturating_add(1));
    let Some(&leading) = terms.next() else {
        return 0.0;
    };

    terms.fold(leading, |accumulator, &coefficient| {
        accumulator * x + coefficient
    })
}

/// Evaluates `x^N + c[0] x^(N-1) + ... + c[N-1]`; the leading `1.0` is not
/// stored in the table.
pub fn evaluate_monic_polynomial(x: f64, coefficients: &[f64], degree: usize) -> f64 {
    let mut terms = coefficients.iter().take(degree.max(1));
    let Some(&first) = terms.next() else {
        return x;
    };

    terms.fold(x + first, |accumulator, &coefficient| {
        accumulator * x + coefficient
    })
}

/// A coefficient table paired with the degree it is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: &'static [f64],
    degree: usize,
}

impl Polynomial {
    pub const fn new(coefficients: &'static [f64], degree: usize) -> Self {
        Self {
            coefficients,
            degree,
        }
    }

    pub const fn coefficients(&self) -> &'static [f64] {
        self.coefficients
    }

    pub const fn degree(&self) -> usize {
        self.degree
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_polynomial(x, self.coefficients, self.degree)
    }
}

/// Like [`Polynomial`] with an implicit unit leading coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonicPolynomial {
    coefficients: &'static [f64],
    degree: usize,
}

impl MonicPolynomial {
    pub const fn new(coefficients: &'static [f64], degree: usize) -> Self {
        Self {
            coefficients,
            degree,
        }
    }

    pub const fn coefficients(&self) -> &'static [f64] {
        self.coefficients
    }

    pub const fn degree(&self) -> usize {
        self.degree
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_monic_polynomial(x, self.coefficients, self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::{MonicPolynomial, Polynomial, evaluate_monic_polynomial, evaluate_polynomial};

    const CUBIC: [f64; 4] = [2.0, -3.0, 0.5, 7.0];

    fn direct_sum(x: f64, coefficients: &[f64], degree: usize) -> f64 {
        (0..=degree)
            .map(|power| coefficients[degree - power] * x.powi(power as i32))
            .sum()
    }

    #[test]
    fn horner_matches_direct_power_sum() {
        for x in [-3.5, -1.0, -0.25, 0.0, 0.1, 1.0, 2.75, 10.0] {
            let expected = direct_sum(x, &CUBIC, 3);
            let actual = evaluate_polynomial(x, &CUBIC, 3);
            let scale = expected.abs().max(1.0);
            assert!(
                (actual - expected).abs() / scale < 1.0e-12,
                "x={x} expected={expected} actual={actual}"
            );
        }
    }

    #[test]
    fn horner_follows_left_to_right_order() {
        let x = 0.3;
        let expected = ((2.0 * x + -3.0) * x + 0.5) * x + 7.0;
        assert_eq!(evaluate_polynomial(x, &CUBIC, 3).to_bits(), expected.to_bits());
    }

    #[test]
    fn degree_zero_returns_leading_coefficient() {
        assert_eq!(evaluate_polynomial(123.0, &CUBIC, 0), 2.0);
    }

    #[test]
    fn lower_degree_ignores_trailing_entries() {
        let padded = [1.0, 2.0, 0.0, 0.0];
        assert_eq!(evaluate_polynomial(3.0, &padded, 1), 5.0);
    }

    #[test]
    fn monic_matches_polynomial_with_unit_leading_coefficient() {
        let stored = [-3.0, 0.5, 7.0];
        let expanded = [1.0, -3.0, 0.5, 7.0];
        for x in [-2.0, -0.5, 0.0, 0.75, 4.0, 19.0] {
            assert_eq!(
                evaluate_monic_polynomial(x, &stored, 3).to_bits(),
                evaluate_polynomial(x, &expanded, 3).to_bits(),
                "x={x}"
            );
        }
    }

    #[test]
    fn monic_degree_one_is_shifted_identity() {
        assert_eq!(evaluate_monic_polynomial(2.5, &[4.0, 99.0], 1), 6.5);
    }

    #[test]
    fn mismatched_lengths_do_not_panic() {
        assert_eq!(evaluate_polynomial(2.0, &[1.0, 1.0], 6), 3.0);
        assert_eq!(evaluate_polynomial(2.0, &[], 3), 0.0);
        assert_eq!(evaluate_monic_polynomial(2.0, &[1.0], 5), 3.0);
        assert_eq!(evaluate_monic_polynomial(2.0, &[], 2), 2.0);
    }

    #[test]
    fn wrappers_delegate_to_free_functions() {
        const TABLE: [f64; 4] = [2.0, -3.0, 0.5, 7.0];
        let polynomial = Polynomial::new(&TABLE, 3);
        let monic = MonicPolynomial::new(&TABLE, 4);

        assert_eq!(polynomial.degree(), 3);
        assert_eq!(polynomial.coefficients().len(), 4);
        assert_eq!(polynomial.evaluate(1.5), evaluate_polynomial(1.5, &TABLE, 3));
        assert_eq!(monic.evaluate(1.5), evaluate_monic_polynomial(1.5, &TABLE, 4));
    }
}
