/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Interleaved floating point image storage
//!
//! A raster stores samples row by row, with every pixel's channels
//! laid out next to each other
//!
//! ```text
//! [R,G,B][R,G,B][R,G,B]  <- row 0
//! [R,G,B][R,G,B][R,G,B]  <- row 1
//! ```
use alloc::vec::Vec;
use core::num::NonZeroU32;

use zune_core::colorspace::ColorSpace;

use crate::errors::RasterErrors;

/// A dense row-major `f32` image with an arbitrary number of channels
#[derive(Clone, Debug, PartialEq)]
pub struct RasterBuffer {
    data:     Vec<f32>,
    width:    usize,
    height:   usize,
    channels: usize
}

impl RasterBuffer {
    /// Wrap already interleaved samples
    ///
    /// # Errors
    /// - [`RasterErrors::ZeroDimension`] if any of width, height or channels is zero
    /// - [`RasterErrors::WrongDimensions`] if `data.len() != width*height*channels`
    pub fn new(
        data: Vec<f32>, width: usize, height: usize, channels: usize
    ) -> Result<RasterBuffer, RasterErrors> {
        let expected = Self::expected_len(width, height, channels)?;

        if data.len() != expected {
            return Err(RasterErrors::WrongDimensions(expected, data.len()));
        }
        Ok(RasterBuffer {
            data,
            width,
            height,
            channels
        })
    }

    /// Create a raster where every pixel holds `pixel`
    ///
    /// The channel count is the length of `pixel`.
    pub fn fill(pixel: &[f32], width: usize, height: usize) -> Result<RasterBuffer, RasterErrors> {
        let expected = Self::expected_len(width, height, pixel.len())?;

        let mut data = Vec::with_capacity(expected);

        for _ in 0..width * height {
            data.extend_from_slice(pixel);
        }
        RasterBuffer::new(data, width, height, pixel.len())
    }

    /// Number of samples a raster of the given dimensions holds
    ///
    /// # Errors
    /// If a dimension is zero or the product overflows
    pub fn expected_len(
        width: usize, height: usize, channels: usize
    ) -> Result<usize, RasterErrors> {
        if width == 0 {
            return Err(RasterErrors::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(RasterErrors::ZeroDimension("height"));
        }
        if channels == 0 {
            return Err(RasterErrors::ZeroDimension("channel count"));
        }
        width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(channels))
            .ok_or(RasterErrors::Generic("Overflow calculating raster size"))
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Channels of the pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the raster
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        assert!(x < self.width && y < self.height, "({x},{y}) is outside the raster");
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Mutable channels of the pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the raster
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [f32] {
        assert!(x < self.width && y < self.height, "({x},{y}) is outside the raster");
        let start = (y * self.width + x) * self.channels;
        &mut self.data[start..start + self.channels]
    }

    /// Interpret the channel count as a colorspace
    ///
    /// One to four channels map to luma, luma-alpha, RGB and RGBA,
    /// anything wider is a multi-band image.
    pub fn colorspace(&self) -> ColorSpace {
        match self.channels {
            1 => ColorSpace::Luma,
            2 => ColorSpace::LumaA,
            3 => ColorSpace::RGB,
            4 => ColorSpace::RGBA,
            n => match u32::try_from(n).ok().and_then(NonZeroU32::new) {
                Some(bands) => ColorSpace::MultiBand(bands),
                None => ColorSpace::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::errors::RasterErrors;
    use crate::raster::RasterBuffer;

    #[test]
    fn rejects_wrong_length() {
        let err = RasterBuffer::new(vec![0.0; 10], 2, 2, 3).unwrap_err();

        assert!(matches!(err, RasterErrors::WrongDimensions(12, 10)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            RasterBuffer::new(vec![], 0, 2, 3),
            Err(RasterErrors::ZeroDimension("width"))
        ));
        assert!(matches!(
            RasterBuffer::new(vec![], 2, 0, 3),
            Err(RasterErrors::ZeroDimension("height"))
        ));
        assert!(matches!(
            RasterBuffer::fill(&[], 2, 2),
            Err(RasterErrors::ZeroDimension("channel count"))
        ));
    }

    #[test]
    fn pixel_addressing() {
        let data = (0..24).map(|x| x as f32).collect();
        let raster = RasterBuffer::new(data, 4, 2, 3).unwrap();

        assert_eq!(raster.pixel(0, 0), &[0.0, 1.0, 2.0]);
        assert_eq!(raster.pixel(3, 0), &[9.0, 10.0, 11.0]);
        assert_eq!(raster.pixel(1, 1), &[15.0, 16.0, 17.0]);
        assert_eq!(raster.data()[12], 12.0);
    }

    #[test]
    fn colorspace_from_channels() {
        let colors = [1, 2, 3, 4, 7].map(|c| RasterBuffer::fill(&vec![0.0; c], 1, 1).unwrap());

        assert_eq!(colors[0].colorspace(), ColorSpace::Luma);
        assert_eq!(colors[1].colorspace(), ColorSpace::LumaA);
        assert_eq!(colors[2].colorspace(), ColorSpace::RGB);
        assert_eq!(colors[3].colorspace(), ColorSpace::RGBA);
        assert_eq!(colors[4].colorspace().num_components(), 7);
    }
}
