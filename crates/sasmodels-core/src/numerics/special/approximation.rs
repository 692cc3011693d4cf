//! Two-regime special-function approximations.
//!
//! Each approximation pairs a small-argument branch (usually a rational
//! polynomial fit or a truncated series) with a large-argument branch
//! (usually an asymptotic modulus/phase form), selected by a fixed cutoff on
//! the reduced argument. Keeping the branches as separate functions lets
//! every branch be evaluated and tested on its own.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    SmallArgument,
    LargeArgument,
}

impl Regime {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallArgument => "small-argument",
            Self::LargeArgument => "large-argument",
        }
    }
}

impl Display for Regime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Threshold separating the regimes. The comparison direction is part of
/// the fitted contract, so `x == threshold` is routed explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    /// `x < threshold` selects the small-argument branch.
    Below(f64),
    /// `x <= threshold` selects the small-argument branch.
    AtOrBelow(f64),
}

impl Cutoff {
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Below(threshold) | Self::AtOrBelow(threshold) => threshold,
        }
    }

    /// NaN arguments fail both comparisons and land in the large-argument
    /// branch.
    pub fn regime(self, x: f64) -> Regime {
        let small = match self {
            Self::Below(threshold) => x < threshold,
            Self::AtOrBelow(threshold) => x <= threshold,
        };

        if small {
            Regime::SmallArgument
        } else {
            Regime::LargeArgument
        }
    }
}

/// How negative arguments are folded before a branch is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// `f(-x) = f(x)`
    Even,
    /// `f(-x) = -f(x)`
    Odd,
    /// The raw argument is passed through, negative values included.
    Direct,
}

impl Reflection {
    fn reduce(self, x: f64) -> (f64, f64) {
        match self {
            Self::Even => (1.0, if x < 0.0 { -x } else { x }),
            Self::Odd => {
                if x < 0.0 {
                    (-1.0, -x)
                } else {
                    (1.0, x)
                }
            }
            Self::Direct => (1.0, x),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegimeSplitApproximation {
    name: &'static str,
    cutoff: Cutoff,
    reflection: Reflection,
    small_argument: fn(f64) -> f64,
    large_argument: fn(f64) -> f64,
}

impl RegimeSplitApproximation {
    pub const fn new(
        name: &'static str,
        cutoff: Cutoff,
        reflection: Reflection,
        small_argument: fn(f64) -> f64,
        large_argument: fn(f64) -> f64,
    ) -> Self {
        Self {
            name,
            cutoff,
            reflection,
            small_argument,
            large_argument,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    pub const fn reflection(&self) -> Reflection {
        self.reflection
    }

    /// Regime that [`Self::evaluate`] would use for `x`.
    pub fn regime(&self, x: f64) -> Regime {
        let (_, reduced) = self.reflection.reduce(x);
        self.cutoff.regime(reduced)
    }

    /// Evaluates one branch regardless of the cutoff; used to audit each fit
    /// and the continuity at the threshold.
    pub fn evaluate_regime(&self, regime: Regime, x: f64) -> f64 {
        let (sign, reduced) = self.reflection.reduce(x);
        let value = match regime {
            Regime::SmallArgument => (self.small_argument)(reduced),
            Regime::LargeArgument => (self.large_argument)(reduced),
        };
        match self.reflection {
            Reflection::Odd => sign * value,
            Reflection::Even | Reflection::Direct => value,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluate_regime(self.regime(x), x)
    }
}
