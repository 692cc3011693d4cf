//! Concentric shell-pair stacks shared by the multilayer sphere models.
//!
//! A stack is a core of radius `radius` wrapped in `n_pairs` repetitions of
//! a shell of thickness `thick_shell` followed by a solvent gap of thickness
//! `thick_solvent`. Each pair contributes the difference of two uniform
//! sphere amplitudes, weighted by sphere volume and contrast.

use crate::common::constants::{INTENSITY_SCALE, SPHERE_VOLUME_PREFACTOR};
use crate::numerics::special::sph_j1c;

/// Radii of the pair at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellPair {
    pub index: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellGeometry {
    pub radius: f64,
    pub thick_shell: f64,
    pub thick_solvent: f64,
}

impl ShellGeometry {
    pub const fn new(radius: f64, thick_shell: f64, thick_solvent: f64) -> Self {
        Self {
            radius,
            thick_shell,
            thick_solvent,
        }
    }

    pub fn pair(&self, index: usize) -> ShellPair {
        let inner_radius = self.radius + index as f64 * (self.thick_shell + self.thick_solvent);
        ShellPair {
            index,
            inner_radius,
            outer_radius: inner_radius + self.thick_shell,
        }
    }

    /// Outer radius of the last pair the kernel visits for `n_pairs`.
    pub fn outer_radius(&self, n_pairs: f64) -> f64 {
        self.pair(shell_pair_count(n_pairs) - 1).outer_radius
    }
}

/// `4 pi r^3 / 3`, multiplied out left to right.
pub fn sphere_volume(radius: f64) -> f64 {
    SPHERE_VOLUME_PREFACTOR * radius * radius * radius
}

/// Signed sum of layer amplitudes and the volume of the last layer added.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShellStackAccumulator {
    amplitude: f64,
    last_volume: f64,
}

impl ShellStackAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn last_volume(&self) -> f64 {
        self.last_volume
    }

    /// Adds the inner sphere of `pair` and removes the outer one.
    pub fn add_pair(&mut self, q: f64, contrast: f64, pair: ShellPair) {
        let volume = sphere_volume(pair.inner_radius);
        self.amplitude += volume * contrast * sph_j1c(pair.inner_radius * q);

        let volume = sphere_volume(pair.outer_radius);
        self.amplitude -= volume * contrast * sph_j1c(pair.outer_radius * q);
        self.last_volume = volume;
    }

    /// Squared amplitude normalized by the outermost volume, multiplied in
    /// the order of the compound assignment `f *= scale * 1e-4 * f / v`.
    pub fn finish(self, scale: f64) -> f64 {
        let mut amplitude = self.amplitude;
        amplitude *= scale * INTENSITY_SCALE * amplitude / self.last_volume;
        amplitude
    }
}

/// Number of pairs visited for `n_pairs`: the body runs once, then repeats
/// while `index <= n_pairs - 1`, so the count is `max(1, floor(n_pairs - 1) + 1)`.
/// Anything below 2 (negative, fractional or NaN) gives a single pair, the
/// unilamellar case. Infinite counts saturate at `usize::MAX`.
pub fn shell_pair_count(n_pairs: f64) -> usize {
    let last_index = (n_pairs - 1.0).floor();
    if last_index >= 1.0 {
        (last_index as usize).saturating_add(1)
    } else {
        1
    }
}

/// Accumulated, un-normalized stack amplitude at scattering vector `q`.
pub fn shell_stack_accumulate(
    q: f64,
    geometry: ShellGeometry,
    contrast: f64,
    n_pairs: f64,
) -> ShellStackAccumulator {
    let mut accumulator = ShellStackAccumulator::new();
    let mut index = 0_usize;

    loop {
        accumulator.add_pair(q, contrast, geometry.pair(index));
        index += 1;

        // NaN n_pairs fails this test and stops after the first pair.
        let more_pairs = index as f64 <= n_pairs - 1.0;
        if !more_pairs {
            break;
        }
    }

    accumulator
}

/// Normalized intensity of a shell stack scaled by `scale` (a volume
/// fraction, or 1).
pub fn shell_stack_intensity(
    q: f64,
    geometry: ShellGeometry,
    contrast: f64,
    n_pairs: f64,
    scale: f64,
) -> f64 {
    shell_stack_accumulate(q, geometry, contrast, n_pairs).finish(scale)
}
