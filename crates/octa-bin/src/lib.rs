/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end of equi2octa
//!
//! The binary converts one equirectangular radiance panorama
//! into an octahedral map, the actual work is done by `zune-hdr`
//! and `octa-procs`.

use std::process::exit;

use log::{error, info};

use crate::workflow::{create_and_exec_workflow_from_cmd, Outcome};

mod cmd_args;
mod cmd_parsers;
pub mod errors;
pub mod file_io;
pub mod paths;
pub mod workflow;

pub use cmd_args::create_cmd_args;
pub use cmd_parsers::global_options::CmdOptions;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    match create_and_exec_workflow_from_cmd(&options, &parsed_opts) {
        Ok(Outcome::Converted(path)) => info!("Octahedral map saved to {:?}", path),
        Ok(Outcome::Skipped) => info!("Output left untouched"),
        Err(reason) => {
            println!();
            error!(" Could not complete workflow, reason {:?}", reason);
            println!();
            exit(1);
        }
    }
}
