//! Shared numeric constants of the scattering kernels.

pub const PI: f64 = std::f64::consts::PI;

/// `4 pi / 3`, folded in the order `(4 * pi) / 3`.
pub const SPHERE_VOLUME_PREFACTOR: f64 = 4.0 * PI / 3.0;

/// Converts `(1e-6/Ang^2 * Ang^3)^2 / Ang^3` to absolute intensity in `1/cm`.
pub const INTENSITY_SCALE: f64 = 1.0e-4;

/// Largest value validation accepts for a loop-count parameter such as
/// `n_pairs`; the kernel visits that many shell pairs per `q`.
pub const COUNT_PARAMETER_LIMIT: f64 = 1.0e6;
