/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that end a conversion run

use std::fmt::{Debug, Display, Formatter};

use octa_procs::RasterErrors;
use zune_hdr::{HdrDecodeErrors, HdrEncodeErrors};

/// Everything that can go wrong between reading the command line
/// and writing the octahedral map
///
/// All of them are terminal, the binary reports them and exits
/// with a failure status.
pub enum ConvertErrors {
    /// Input or output path can't be resolved or is of the wrong kind
    PathError(String),
    /// The panorama couldn't be read or isn't a valid radiance file
    DecodeError(HdrDecodeErrors),
    /// The octahedral map couldn't be written
    EncodeError(HdrEncodeErrors),
    /// The decoded image can't be resampled
    RasterError(RasterErrors),
    /// Reading the overwrite confirmation failed
    Io(std::io::Error)
}

impl Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertErrors::PathError(reason) => writeln!(f, "{reason}"),
            ConvertErrors::DecodeError(err) => {
                writeln!(f, "Failed to load input image: {:?}", err)
            }
            ConvertErrors::EncodeError(err) => {
                writeln!(f, "Failed to save output image: {:?}", err)
            }
            ConvertErrors::RasterError(err) => writeln!(f, "Invalid image: {:?}", err),
            ConvertErrors::Io(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl Display for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ConvertErrors {}

impl From<HdrDecodeErrors> for ConvertErrors {
    fn from(value: HdrDecodeErrors) -> Self {
        ConvertErrors::DecodeError(value)
    }
}

impl From<HdrEncodeErrors> for ConvertErrors {
    fn from(value: HdrEncodeErrors) -> Self {
        ConvertErrors::EncodeError(value)
    }
}

impl From<RasterErrors> for ConvertErrors {
    fn from(value: RasterErrors) -> Self {
        ConvertErrors::RasterError(value)
    }
}

impl From<std::io::Error> for ConvertErrors {
    fn from(value: std::io::Error) -> Self {
        ConvertErrors::Io(value)
    }
}
