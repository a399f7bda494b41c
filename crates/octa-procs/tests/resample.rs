/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use octa_procs::direction::Direction;
use octa_procs::raster::RasterBuffer;
use octa_procs::resample::{equirect_to_octahedral, source_index, EquirectToOctahedral};
use octa_procs::{equirectangular, octahedral};

/// A single channel raster where each pixel holds its own linear index
fn index_raster(width: usize, height: usize) -> RasterBuffer {
    let data = (0..width * height).map(|x| x as f32).collect();
    RasterBuffer::new(data, width, height, 1).unwrap()
}

fn random_raster(width: usize, height: usize, channels: usize, seed: u64) -> RasterBuffer {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let data = (0..width * height * channels)
        .map(|_| rand.generate::<f32>() * 16.0)
        .collect();

    RasterBuffer::new(data, width, height, channels).unwrap()
}

#[test]
fn uniform_source_gives_uniform_output() {
    let source = RasterBuffer::fill(&[1.0, 0.0, 0.0], 4, 2).unwrap();
    let output = equirect_to_octahedral(&source).unwrap();

    assert_eq!(output.dimensions(), (2, 2));
    assert_eq!(output.channels(), 3);
    assert_eq!(output.data().len(), 2 * 2 * 3);

    for pixel in output.data().chunks_exact(3) {
        assert_eq!(pixel, [1.0, 0.0, 0.0]);
    }
}

#[test]
fn centre_samples_the_zenith() {
    let (width, height) = (8, 4);
    let mut source = RasterBuffer::fill(&[0.0, 0.0, 0.0], width, height).unwrap();

    let zenith = equirectangular::direction_to_uv(Direction::POSITIVE_Z);
    let (zx, zy) = source_index(zenith, width, height);
    assert_eq!((zx, zy), (4, 0));

    source.pixel_mut(zx, zy).copy_from_slice(&[7.0, 8.0, 9.0]);

    let output = equirect_to_octahedral(&source).unwrap();
    let side = output.width();

    assert_eq!(output.pixel(side / 2, side / 2), &[7.0, 8.0, 9.0]);
}

#[test]
fn seam_texel_samples_the_last_column() {
    let (width, height) = (16, 8);
    let source = index_raster(width, height);
    let output = equirect_to_octahedral(&source).unwrap();

    // left edge midpoint is -X, which lies on the wrap seam of the panorama
    let sampled = output.pixel(0, height / 2)[0] as usize;

    assert_eq!(sampled % width, width - 1);
    assert_eq!(sampled / width, height / 2);
}

#[test]
fn every_read_is_inside_the_source() {
    for (width, height) in [(1, 1), (2, 1), (3, 2), (4, 2), (7, 5), (16, 8), (33, 17), (100, 3)] {
        let source = index_raster(width, height);
        let output = EquirectToOctahedral::new().execute(&source).unwrap();

        assert_eq!(output.dimensions(), (height, height));

        for value in output.data() {
            assert_eq!(value.fract(), 0.0);
            assert!((*value as usize) < width * height, "{value} read out of bounds");
        }
    }
}

#[test]
fn output_matches_the_composed_mapping() {
    let (width, height) = (24, 12);
    let source = random_raster(width, height, 3, 42);
    let output = equirect_to_octahedral(&source).unwrap();

    for y in 0..height {
        for x in 0..height {
            let uv = octa_procs::direction::NormalizedUV::new(
                x as f32 / height as f32,
                y as f32 / height as f32
            );
            let direction = octahedral::uv_to_direction(uv);
            let (sx, sy) =
                source_index(equirectangular::direction_to_uv(direction), width, height);

            assert_eq!(output.pixel(x, y), source.pixel(sx, sy));
        }
    }
}

#[test]
fn threaded_matches_single_threaded() {
    let source = random_raster(74, 37, 3, 7);

    let single = EquirectToOctahedral::new()
        .with_threads(1)
        .execute(&source)
        .unwrap();

    for threads in [2, 3, 5, 37, 64] {
        let threaded = EquirectToOctahedral::new()
            .with_threads(threads)
            .execute(&source)
            .unwrap();

        assert_eq!(single, threaded, "{threads} threads differ");
    }
}

#[test]
fn channel_count_is_preserved() {
    for channels in [1, 2, 4, 5] {
        let pixel: Vec<f32> = (0..channels).map(|c| c as f32 + 0.5).collect();
        let source = RasterBuffer::fill(&pixel, 10, 5).unwrap();
        let output = equirect_to_octahedral(&source).unwrap();

        assert_eq!(output.channels(), channels);
        assert_eq!(output.data().len(), 5 * 5 * channels);
        assert!(output.data().chunks_exact(channels).all(|x| x == pixel));
    }
}
