/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Direction mapping and resampling routines for spherical HDR images.
//!
//! This crate converts equirectangular panoramas into octahedral maps.
//!
//! It is split into
//! - [`direction`]: unit directions and normalized texel coordinates
//! - [`equirectangular`]: direction to equirectangular texel coordinates
//! - [`octahedral`]: octahedral texel coordinates to direction and back
//! - [`resample`]: the nearest neighbour kernel composing the two mappings
//! - [`raster`]: the interleaved floating point buffer the kernel reads and writes
//!
//! # Example
//! ```
//! use octa_procs::raster::RasterBuffer;
//! use octa_procs::resample::EquirectToOctahedral;
//!
//! // a 4x2 red panorama
//! let source = RasterBuffer::fill(&[1.0, 0.0, 0.0], 4, 2).unwrap();
//! let output = EquirectToOctahedral::new().execute(&source).unwrap();
//!
//! assert_eq!(output.dimensions(), (2, 2));
//! assert!(output.data().chunks_exact(3).all(|x| x == [1.0, 0.0, 0.0]));
//! ```
//!
//! # Features
//! - `threads`: Split the output rows between scoped threads, enabled by default
//! - `log`: Forward trace and debug messages to the [log](https://docs.rs/log) crate
#![forbid(unsafe_code)]
#![macro_use]
extern crate alloc;
extern crate core;
pub extern crate zune_core;

pub use errors::RasterErrors;

pub mod direction;
pub mod equirectangular;
mod errors;
pub mod octahedral;
pub mod raster;
pub mod resample;
