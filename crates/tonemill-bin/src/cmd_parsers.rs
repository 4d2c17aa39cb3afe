/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use zune_core::options::DecoderOptions;

/// Configure the logger from the command line verbosity flags
pub fn setup_logger(options: &ArgMatches) {
    let mut log_level = LevelFilter::Warn;

    if options.get_flag("trace") {
        log_level = LevelFilter::Trace;
    } else if options.get_flag("debug") {
        log_level = LevelFilter::Debug;
    } else if options.get_flag("info") {
        log_level = LevelFilter::Info;
    } else if options.get_flag("warn") {
        log_level = LevelFilter::Warn;
    }

    let _ = SimpleLogger::new().with_level(log_level).init();
}

/// Build decoder options from the command line flags
pub fn decoder_options(options: &ArgMatches) -> DecoderOptions {
    let decoder_options = DecoderOptions::default().set_strict_mode(options.get_flag("strict"));

    decoder_options
}
