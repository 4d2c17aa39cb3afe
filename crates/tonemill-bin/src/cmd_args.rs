/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use tonemill_imageprocs::apply::OPERATION_NAMES;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("tonemill")
        .about("Pixel level image transforms behind a decode, process, encode pipeline")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Set)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .help("Output to write the data to")
            .long("out")
            .action(ArgAction::Set))
        .arg(Arg::new("operation")
            .short('t')
            .long("operation")
            .help("Transform to apply to the decoded image")
            .action(ArgAction::Set)
            .value_parser(OPERATION_NAMES))
        .arg(Arg::new("levels")
            .long("levels")
            .help("Quantization levels in [1,256], read by the quantize operation")
            .value_parser(value_parser!(u16))
            .default_value("4"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image information as JSON and exit"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat recoverable decode warnings as hard errors"))
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
            .help("Display information about decoding and operations"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn args_are_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn operation_values_parse() {
        let matches = create_cmd_args()
            .try_get_matches_from(["tonemill", "-i", "in.ppm", "-o", "out.ppm", "-t", "smooth"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>("operation").map(String::as_str),
            Some("smooth")
        );
    }

    #[test]
    fn unknown_operation_fails_parsing() {
        let result = create_cmd_args()
            .try_get_matches_from(["tonemill", "-i", "in.ppm", "-t", "emboss"]);

        assert!(result.is_err());
    }
}
