/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use octa_procs::raster::RasterBuffer;

/// A synthetic RGB panorama of `width` x `width/2` pixels
///
/// Channels hold the column, the row and a checker pattern so
/// the resampler never copies from flat data.
///
/// # Panics
/// If `width` is zero
pub fn synthetic_panorama(width: usize) -> RasterBuffer {
    let height = (width / 2).max(1);
    let mut data = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            let checker = if (x / 16 + y / 16) % 2 == 0 { 0.1 } else { 4.0 };
            data.extend_from_slice(&[x as f32 / width as f32, y as f32, checker]);
        }
    }
    RasterBuffer::new(data, width, height, 3).unwrap()
}
