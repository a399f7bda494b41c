/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Equirectangular to octahedral resampling
//!
//! For every output texel the kernel finds the direction it represents on the
//! octahedral square, looks that direction up in the panorama and copies the
//! nearest source pixel over.
//!
//! ```text
//! (x,y) -> octahedral::uv_to_direction -> equirectangular::direction_to_uv -> source[sy][sx]
//! ```
//!
//! The output is always square, its side is the height of the panorama.
//!
//! # Threading
//! Every output row depends only on the source, so with the `threads` feature
//! the output is split into bands of whole rows and each band is filled by its
//! own scoped thread.
use alloc::vec;
use core::num::NonZeroUsize;

use zune_core::log::{debug, trace};

use crate::direction::NormalizedUV;
use crate::errors::RasterErrors;
use crate::raster::RasterBuffer;
use crate::{equirectangular, octahedral};

/// Nearest source texel for a panorama coordinate
///
/// Indices are clamped to `[0, dim-1]`, so coordinates of exactly `1.0`
/// (reachable on the `-X` seam and the `-Z` pole) and tiny negative rounding
/// errors stay inside the raster. `NaN` maps to zero.
#[inline]
pub fn source_index(uv: NormalizedUV, width: usize, height: usize) -> (usize, usize) {
    // float to int `as` casts saturate, negatives and NaN become 0
    let x = (uv.u * width as f32).floor() as usize;
    let y = (uv.v * height as f32).floor() as usize;

    (x.min(width.saturating_sub(1)), y.min(height.saturating_sub(1)))
}

/// Fill a single output row of an octahedral map of size `side` from `source`
///
/// `out_row` must hold `side * source.channels()` samples.
pub fn resample_row(source: &RasterBuffer, y: usize, side: usize, out_row: &mut [f32]) {
    let (width, height) = source.dimensions();
    let channels = source.channels();
    let side_f = side as f32;
    let v = y as f32 / side_f;

    for (x, out_pixel) in out_row.chunks_exact_mut(channels).enumerate() {
        let oct_uv = NormalizedUV::new(x as f32 / side_f, v);
        let direction = octahedral::uv_to_direction(oct_uv);
        let equi_uv = equirectangular::direction_to_uv(direction);
        let (src_x, src_y) = source_index(equi_uv, width, height);

        out_pixel.copy_from_slice(source.pixel(src_x, src_y));
    }
}

/// Fill consecutive output rows starting at `first_row`
fn resample_rows(source: &RasterBuffer, rows: &mut [f32], first_row: usize, side: usize) {
    let stride = side * source.channels();

    for (offset, row) in rows.chunks_exact_mut(stride).enumerate() {
        resample_row(source, first_row + offset, side, row);
    }
}

/// Convert an equirectangular panorama into a square octahedral map
///
/// The output keeps the channel count of the source and has a side length
/// equal to the source height.
///
/// # Example
/// ```
/// use octa_procs::raster::RasterBuffer;
/// use octa_procs::resample::EquirectToOctahedral;
///
/// let panorama = RasterBuffer::fill(&[0.25], 8, 4).unwrap();
/// let octahedral = EquirectToOctahedral::new()
///     .with_threads(2)
///     .execute(&panorama)
///     .unwrap();
///
/// assert_eq!(octahedral.dimensions(), (4, 4));
/// assert_eq!(octahedral.channels(), 1);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct EquirectToOctahedral {
    threads: Option<NonZeroUsize>
}

impl EquirectToOctahedral {
    /// Create a new conversion which uses all available cores
    #[must_use]
    pub fn new() -> EquirectToOctahedral {
        EquirectToOctahedral::default()
    }

    /// Limit the number of worker threads
    ///
    /// Zero restores the default of one thread per available core.
    /// Ignored without the `threads` feature.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> EquirectToOctahedral {
        self.threads = NonZeroUsize::new(threads);
        self
    }

    pub fn name(&self) -> &'static str {
        "Equirectangular to octahedral"
    }

    /// Side length of the square map produced from `source`
    pub const fn output_side(source: &RasterBuffer) -> usize {
        source.height()
    }

    /// Number of threads that will split `rows` output rows
    pub fn worker_count(&self, rows: usize) -> usize {
        if cfg!(feature = "threads") {
            let workers = self
                .threads
                .or_else(|| std::thread::available_parallelism().ok())
                .map_or(1, NonZeroUsize::get);

            workers.clamp(1, rows.max(1))
        } else {
            1
        }
    }

    /// Run the conversion
    ///
    /// # Errors
    /// If the output size overflows a `usize`
    pub fn execute(&self, source: &RasterBuffer) -> Result<RasterBuffer, RasterErrors> {
        let side = Self::output_side(source);
        let channels = source.channels();

        let output_len = RasterBuffer::expected_len(side, side, channels)?;
        let mut output = vec![0.0_f32; output_len];

        let workers = self.worker_count(side);

        trace!(
            "Source {}x{} with {} channels",
            source.width(),
            source.height(),
            channels
        );
        debug!("{}: {side}x{side} output on {workers} thread(s)", self.name());

        #[cfg(feature = "threads")]
        {
            if workers > 1 {
                let rows_per_worker = side.div_ceil(workers);
                let band_len = rows_per_worker * side * channels;

                std::thread::scope(|s| {
                    for (band, rows) in output.chunks_mut(band_len).enumerate() {
                        s.spawn(move || {
                            resample_rows(source, rows, band * rows_per_worker, side);
                        });
                    }
                });
            } else {
                resample_rows(source, &mut output, 0, side);
            }
        }
        #[cfg(not(feature = "threads"))]
        {
            resample_rows(source, &mut output, 0, side);
        }

        RasterBuffer::new(output, side, side, channels)
    }
}

/// Convert `source` with the default settings
///
/// See [`EquirectToOctahedral`]
pub fn equirect_to_octahedral(source: &RasterBuffer) -> Result<RasterBuffer, RasterErrors> {
    EquirectToOctahedral::new().execute(source)
}
