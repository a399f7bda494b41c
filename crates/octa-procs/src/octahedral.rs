/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Octahedral mapping of the unit sphere onto a square
//!
//! The upper hemisphere (`z >= 0`) occupies the inner diamond of the square,
//! the lower hemisphere is folded into the four corner triangles.
//!
//! ```text
//!  (0,0)             (1,0)
//!   ┌───────┬───────┐
//!   │ -Z   /│\   -Z │
//!   │    /  │  \    │
//!   │  /    +Y   \  │
//!   ├-X─────+Z─────+X
//!   │  \    -Y   /  │
//!   │    \  │  /    │
//!   │ -Z   \│/   -Z │
//!   └───────┴───────┘
//!  (0,1)             (1,1)
//! ```
//!
//! `v` is flipped before unfolding since texture rows grow downwards while
//! the mapping's `y` axis grows upwards.
//!
//! # Sign convention
//! Folding uses `sign(0) == +1` on both axes, points exactly on
//! an axis fold towards the positive side.
use crate::direction::{Direction, NormalizedUV};

#[inline(always)]
fn sign(n: f32) -> f32 {
    if n < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Map a normalized octahedral texel coordinate to the unit direction it
/// represents
///
/// Coordinates outside `[0,1]` are accepted and fold like their mirror
/// images, but only `[0,1]²` covers the sphere exactly once.
#[inline]
pub fn uv_to_direction(uv: NormalizedUV) -> Direction {
    let v = 1.0 - uv.v;

    let mut x = 2.0 * uv.u - 1.0;
    let mut y = 2.0 * v - 1.0;

    let (a, b) = (x.abs(), y.abs());
    let z = 1.0 - a - b;

    if z < 0.0 {
        x = sign(x) * (1.0 - b);
        y = sign(y) * (1.0 - a);
    }
    // |x|+|y|+|z| == 1 here so the vector is never zero
    Direction::new(x, y, z).normalize()
}

/// Project a direction onto the octahedral square
///
/// This is the inverse of [`uv_to_direction`], the direction does not
/// need to be unit length. A zero vector maps to the centre (`+Z`).
#[inline]
pub fn direction_to_uv(direction: Direction) -> NormalizedUV {
    let l1_norm = direction.x.abs() + direction.y.abs() + direction.z.abs();

    if l1_norm <= 0.0 || !l1_norm.is_finite() {
        return NormalizedUV::new(0.5, 0.5);
    }
    let mut x = direction.x / l1_norm;
    let mut y = direction.y / l1_norm;

    if direction.z < 0.0 {
        let old_x = x;
        x = (1.0 - y.abs()) * sign(old_x);
        y = (1.0 - old_x.abs()) * sign(y);
    }

    NormalizedUV::new(x * 0.5 + 0.5, 1.0 - (y * 0.5 + 0.5))
}
