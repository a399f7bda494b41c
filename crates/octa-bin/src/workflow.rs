/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, stdout, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ArgMatches;
use log::{debug, info};
use octa_procs::resample::EquirectToOctahedral;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::ConvertErrors;
use crate::file_io::{read_equirect, write_octahedral};
use crate::paths::{confirm_overwrite, inspect_output, resolve_paths, OutputState};

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The octahedral map was written to this path
    Converted(PathBuf),
    /// The user declined to overwrite the output
    Skipped
}

pub fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<Outcome, ConvertErrors> {
    info!("Creating workflow from input");

    let input = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| ConvertErrors::PathError("No input file given".to_string()))?;
    let output = args.get_one::<PathBuf>("out").map(PathBuf::as_path);

    let paths = resolve_paths(input, output)?;

    if !verify_output(&paths.output, cmd_opts, stdin().lock(), stdout())? {
        return Ok(Outcome::Skipped);
    }
    convert_file(&paths.input, &paths.output, cmd_opts)?;

    Ok(Outcome::Converted(paths.output))
}

/// Decide whether the conversion may write to `output`
///
/// An existing file is replaced when `--yes` was given,
/// otherwise the user is asked through `answers` and `prompt`.
pub fn verify_output<R: BufRead, W: Write>(
    output: &Path, cmd_opts: &CmdOptions, answers: R, prompt: W
) -> Result<bool, ConvertErrors> {
    match inspect_output(output)? {
        OutputState::Missing => Ok(true),
        OutputState::ExistingFile if cmd_opts.override_files => {
            info!("Overwriting {:?}", output);
            Ok(true)
        }
        OutputState::ExistingFile => confirm_overwrite(output, answers, prompt)
    }
}

/// Read an equirectangular panorama, resample it and write the octahedral map
///
/// The whole input is decoded before the output is opened, so `input`
/// and `output` may be the same file.
pub fn convert_file(input: &Path, output: &Path, cmd_opts: &CmdOptions) -> Result<(), ConvertErrors> {
    let start = Instant::now();

    info!("Reading {:?}", input);
    let source = read_equirect(input, cmd_opts.decoder_options())?;
    let decoded = Instant::now();
    debug!("Decoding took {:?}", decoded.duration_since(start));

    let converter = EquirectToOctahedral::new().with_threads(cmd_opts.threads);
    let octahedral = converter.execute(&source)?;
    drop(source);

    let resampled = Instant::now();
    debug!(
        "{} took {:?}",
        converter.name(),
        resampled.duration_since(decoded)
    );

    info!("Writing {:?}", output);
    let size = write_octahedral(output, &octahedral)?;
    debug!("Encoding took {:?}", resampled.elapsed());

    info!(
        "Wrote {}x{} octahedral map ({} bytes) in {:?}",
        octahedral.width(),
        octahedral.height(),
        size,
        start.elapsed()
    );
    Ok(())
}
