/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Equirectangular (latitude/longitude) panorama mapping
//!
//! ```text
//! u = atan2(y, x) / 2π + 0.5
//! v = asin(-z)    / π  + 0.5
//! ```
//! `u` spans the full azimuth, `v` runs from `+Z` at the top row
//! to `-Z` at the bottom row.
use core::f32::consts::FRAC_1_PI;

use crate::direction::{Direction, NormalizedUV};

/// Scale applied to `(azimuth, elevation)` before the `0.5` offset,
/// that is `(1/2π, 1/π)`
pub const INV_ATAN: (f32, f32) = (FRAC_1_PI * 0.5, FRAC_1_PI);

/// Map a unit direction to normalized panorama coordinates
///
/// The direction should be unit length. The elevation term is clamped to
/// `[-1, 1]` so rounding overshoots on `z` do not produce `NaN`.
///
/// Directions lying exactly on the `-X` seam may produce `u == 1.0`,
/// samplers must tolerate that.
#[inline]
pub fn direction_to_uv(direction: Direction) -> NormalizedUV {
    let azimuth = direction.y.atan2(direction.x);
    let elevation = (-direction.z).clamp(-1.0, 1.0).asin();

    NormalizedUV::new(
        azimuth * INV_ATAN.0 + 0.5,
        elevation * INV_ATAN.1 + 0.5
    )
}
