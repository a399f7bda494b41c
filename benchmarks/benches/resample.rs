/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use octa_benches::synthetic_panorama;
use octa_procs::resample::EquirectToOctahedral;

fn bench_resample(c: &mut Criterion) {
    let panorama = synthetic_panorama(2048);
    let side = EquirectToOctahedral::output_side(&panorama);

    let mut group = c.benchmark_group("resample: equirect to octahedral (2048x1024)");
    group.throughput(Throughput::Elements((side * side) as u64));

    group.bench_function("single thread", |b| {
        let converter = EquirectToOctahedral::new().with_threads(1);
        b.iter(|| black_box(converter.execute(&panorama).unwrap()))
    });

    group.bench_function("all cores", |b| {
        let converter = EquirectToOctahedral::new();
        b.iter(|| black_box(converter.execute(&panorama).unwrap()))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_resample);

criterion_main!(benches);
