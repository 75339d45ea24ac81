//! Affine transform helpers for spatial tracks.

pub(crate) mod affine;

pub use affine::{compose, identity, map_bounds, rotation};
