/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Input and output path checks
//!
//! Both paths are made absolute before anything is read or written,
//! and an existing output is only replaced after confirmation.

use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::{is_separator, Path, PathBuf};

use log::{debug, info};

use crate::errors::ConvertErrors;

/// Suffix appended to the input stem when no output is given
pub const OUTPUT_SUFFIX: &str = "_octahedral.hdr";

/// Absolute input and output locations of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input:  PathBuf,
    pub output: PathBuf
}

/// What currently lives at the output location
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputState {
    Missing,
    ExistingFile
}

/// Resolve the input and output of a conversion
///
/// When `output` is `None` the map goes next to the input,
/// see [`default_output_path`]
pub fn resolve_paths(input: &Path, output: Option<&Path>) -> Result<ResolvedPaths, ConvertErrors> {
    let input = resolve_input(input)?;

    let output = match output {
        Some(path) => resolve_output(path)?,
        None => default_output_path(&input)
    };
    debug!("Input  : {:?}", input);
    debug!("Output : {:?}", output);

    Ok(ResolvedPaths { input, output })
}

/// Canonicalize the input, it must be an existing regular file
pub fn resolve_input(input: &Path) -> Result<PathBuf, ConvertErrors> {
    let canonical = fs::canonicalize(input).map_err(|err| {
        ConvertErrors::PathError(format!("Couldn't find input file {:?}: {err}", input))
    })?;

    if !canonical.is_file() {
        return Err(ConvertErrors::PathError(format!(
            "Input is not a regular file: {:?}",
            canonical
        )));
    }
    Ok(canonical)
}

/// `<dir>/<stem>_octahedral.hdr` for an input at `<dir>/<stem>.<ext>`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut file_name = input.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(OUTPUT_SUFFIX);

    input.with_file_name(file_name)
}

/// Resolve an explicit output path
///
/// The path must name a file, its parent directory must exist.
/// The file itself does not need to exist.
pub fn resolve_output(output: &Path) -> Result<PathBuf, ConvertErrors> {
    let names_directory = output
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .map_or(true, |last| is_separator(char::from(*last)));

    let file_name = match output.file_name() {
        Some(name) if !names_directory => name,
        _ => {
            return Err(ConvertErrors::PathError(format!(
                "Invalid output path {:?}",
                output
            )))
        }
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };
    let parent = fs::canonicalize(parent).map_err(|err| {
        ConvertErrors::PathError(format!("Couldn't find output path {:?}: {err}", parent))
    })?;

    Ok(parent.join(file_name))
}

/// Check that the output location can be written to
///
/// Directories and special files are never replaced
pub fn inspect_output(output: &Path) -> Result<OutputState, ConvertErrors> {
    match fs::metadata(output) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(OutputState::Missing),
        Err(err) => Err(ConvertErrors::Io(err)),
        Ok(meta) if meta.is_dir() => Err(ConvertErrors::PathError(format!(
            "Cannot overwrite directory {:?}",
            output
        ))),
        Ok(meta) if !meta.is_file() => Err(ConvertErrors::PathError(format!(
            "Cannot overwrite special file {:?}",
            output
        ))),
        Ok(_) => Ok(OutputState::ExistingFile)
    }
}

/// Ask whether `path` may be overwritten
///
/// The answer is the first whitespace separated word, blank lines
/// are skipped. Only `y` or `Y` counts as yes, anything else,
/// including end of input, declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path, mut answers: R, mut prompt: W
) -> Result<bool, ConvertErrors> {
    write!(prompt, "Do you want to overwrite {}?\n[y/N]: ", path.display())?;
    prompt.flush()?;

    let mut line = String::new();
    let mut answer = None;

    while answer.is_none() {
        line.clear();
        if answers.read_line(&mut line)? == 0 {
            break;
        }
        answer = line.split_whitespace().next().map(str::to_ascii_lowercase);
    }
    let accepted = answer.as_deref() == Some("y");
    info!("Overwrite {:?}: {}", path, accepted);

    Ok(accepted)
}
