/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

/// Options that apply to the whole run
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CmdOptions {
    /// Resampling threads, `0` picks one per core
    pub threads:        usize,
    pub max_width:      Option<usize>,
    pub max_height:     Option<usize>,
    /// Replace an existing output without asking
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }

    /// Decoder limits for the input panorama
    ///
    /// Limits that weren't given on the command line keep
    /// the defaults of [`DecoderOptions::new_cmd`]
    pub fn decoder_options(&self) -> DecoderOptions {
        let mut options = DecoderOptions::new_cmd();

        if let Some(width) = self.max_width {
            options = options.set_max_width(width);
        }
        if let Some(height) = self.max_height {
            options = options.set_max_height(height);
        }
        options
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(threads) = options.get_one::<usize>("threads") {
        cmd_options.threads = *threads;
    }
    cmd_options.max_width = options.get_one::<usize>("max-width").copied();
    cmd_options.max_height = options.get_one::<usize>("max-height").copied();

    if options.get_flag("yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Pick the log level from the logging flags
///
/// The first flag set in the order debug, trace, warn, info wins,
/// with none set warnings and errors are shown.
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
