/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised when building or resampling a raster
pub enum RasterErrors {
    /// One of width, height or channel count is zero
    ZeroDimension(&'static str),
    /// The sample array length does not match `width*height*channels`
    ///
    /// Contains the expected length followed by the found length
    WrongDimensions(usize, usize),
    /// Generic message
    Generic(&'static str)
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RasterErrors::ZeroDimension(dimension) => {
                writeln!(f, "Raster {dimension} cannot be zero")
            }
            RasterErrors::WrongDimensions(expected, found) => {
                writeln!(
                    f,
                    "Raster sample length {found} doesn't match expected length {expected}"
                )
            }
            RasterErrors::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for RasterErrors {}

impl From<&'static str> for RasterErrors {
    fn from(value: &'static str) -> Self {
        RasterErrors::Generic(value)
    }
}
