/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub(crate) mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("equi2octa")
        .about("Convert an equirectangular HDR panorama into an octahedral map")
        .long_about(help_strings::ABOUT_HELP)
        .arg(Arg::new("in")
            .index(1)
            .value_name("INPUT")
            .help("Equirectangular radiance (.hdr) file to read")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .index(2)
            .value_name("OUTPUT")
            .help("Where to write the octahedral map")
            .long_help(help_strings::OUTPUT_HELP)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite an existing output file without asking"))
        .arg(Arg::new("threads")
            .long("threads")
            .value_name("N")
            .help_heading("ADVANCED")
            .help("Number of threads used for resampling")
            .long_help(help_strings::THREADS_HELP)
            .value_parser(value_parser!(usize))
            .default_value("0"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .value_name("WIDTH")
            .help_heading("ADVANCED")
            .help("Refuse to decode panoramas wider than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .value_name("HEIGHT")
            .help_heading("ADVANCED")
            .help("Refuse to decode panoramas taller than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}
