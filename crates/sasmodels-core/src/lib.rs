//! Polynomial and special-function approximations for small-angle
//! scattering models, and the multilayer shell kernels built on them.

pub mod common;
pub mod domain;
pub mod models;
pub mod numerics;
