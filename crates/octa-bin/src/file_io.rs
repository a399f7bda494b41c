/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::Path;

use log::{debug, info};
use octa_procs::raster::RasterBuffer;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteIoError, ZCursor};
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};
use zune_hdr::{HdrDecodeErrors, HdrDecoder, HdrEncodeErrors, HdrEncoder};

use crate::errors::ConvertErrors;

/// Decode a radiance file into a raster
pub fn read_equirect(path: &Path, options: DecoderOptions) -> Result<RasterBuffer, ConvertErrors> {
    let file = fs::read(path).map_err(|err| HdrDecodeErrors::IoErrors(ZByteIoError::from(err)))?;
    let mut decoder = HdrDecoder::new_with_options(ZCursor::new(file), options);

    decoder.decode_headers()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or(HdrDecodeErrors::Generic("Headers not decoded"))?;
    let colorspace = decoder
        .get_colorspace()
        .ok_or(HdrDecodeErrors::Generic("Headers not decoded"))?;

    debug!("Header entries: {:?}", decoder.metadata());
    info!("Image dimensions: {}x{}", width, height);

    let pixels = decoder.decode()?;

    Ok(RasterBuffer::new(
        pixels,
        width,
        height,
        colorspace.num_components()
    )?)
}

/// Encode a raster and write it to `path`
///
/// Radiance only stores RGB, other channel layouts are rejected.
/// The file is encoded in memory first so an encoding error
/// leaves an existing file untouched.
///
/// Returns the number of bytes written
pub fn write_octahedral(path: &Path, raster: &RasterBuffer) -> Result<usize, ConvertErrors> {
    let colorspace = raster.colorspace();

    if colorspace != ColorSpace::RGB {
        return Err(HdrEncodeErrors::UnsupportedColorspace(colorspace).into());
    }
    let options = EncoderOptions::new(raster.width(), raster.height(), colorspace, BitDepth::Float32);
    let encoder = HdrEncoder::new(raster.data(), options);

    let mut bytes = Vec::with_capacity(encoder.expected_buffer_size().unwrap_or_default());
    let size = encoder.encode(&mut bytes)?;

    fs::write(path, &bytes).map_err(|err| HdrEncodeErrors::IoErrors(ZByteIoError::from(err)))?;

    Ok(size)
}
