/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Directions on the unit sphere and normalized texel coordinates
//!
//! The coordinate convention is right handed, with the panorama azimuth
//! given by `atan2(y, x)` and the elevation by `asin(-z)`.

/// A 3D direction
///
/// Mapping functions expect unit length directions, call
/// [`normalize`](Direction::normalize) before handing arbitrary vectors over.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Direction {
    pub x: f32,
    pub y: f32,
    pub z: f32
}

impl Direction {
    /// The `+Z` axis, also returned when normalizing a degenerate vector
    pub const POSITIVE_Z: Direction = Direction::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Direction {
        Direction { x, y, z }
    }

    pub fn dot(&self, other: &Direction) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Return a unit length copy of this vector
    ///
    /// Zero and non-finite vectors have no direction, for them
    /// [`POSITIVE_Z`](Direction::POSITIVE_Z) is returned.
    #[must_use]
    pub fn normalize(self) -> Direction {
        let length = self.length();

        if length > 0.0 && length.is_finite() {
            let inv = 1.0 / length;
            Direction::new(self.x * inv, self.y * inv, self.z * inv)
        } else {
            Direction::POSITIVE_Z
        }
    }

    /// Angle in radians between two unit directions
    pub fn angle_to(&self, other: &Direction) -> f32 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }
}

impl From<[f32; 3]> for Direction {
    fn from(value: [f32; 3]) -> Self {
        Direction::new(value[0], value[1], value[2])
    }
}

impl From<Direction> for [f32; 3] {
    fn from(value: Direction) -> Self {
        [value.x, value.y, value.z]
    }
}

/// A texel coordinate normalized to `[0,1]` on both axes
///
/// `u` grows to the right and `v` grows downwards, the same way
/// image rows are stored.
///
/// No wrapping or clamping is applied on construction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NormalizedUV {
    pub u: f32,
    pub v: f32
}

impl NormalizedUV {
    pub const fn new(u: f32, v: f32) -> NormalizedUV {
        NormalizedUV { u, v }
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;

    #[test]
    fn normalize_unit_length() {
        let dir = Direction::new(3.0, -4.0, 12.0).normalize();

        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 3.0 / 13.0).abs() < 1e-6);
        assert!((dir.y + 4.0 / 13.0).abs() < 1e-6);
        assert!((dir.z - 12.0 / 13.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_degenerate() {
        assert_eq!(Direction::default().normalize(), Direction::POSITIVE_Z);
        assert_eq!(
            Direction::new(f32::NAN, 0.0, 1.0).normalize(),
            Direction::POSITIVE_Z
        );
    }

    #[test]
    fn angle_between_axes() {
        let x = Direction::new(1.0, 0.0, 0.0);
        let y = Direction::new(0.0, 1.0, 0.0);

        assert!((x.angle_to(&y) - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(x.angle_to(&x).abs() < 1e-3);
    }
}
