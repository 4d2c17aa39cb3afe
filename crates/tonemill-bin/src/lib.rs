/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end for the tonemill engine
//!
//! Drives the whole decode, transform, encode pipeline the surrounding
//! service would otherwise call as a library:
//!
//! ```text
//! tonemill -i photo.jpg -o out.ppm -t sharpen
//! tonemill -i photo.jpg -t quantize --levels 8 -o out.ppm
//! tonemill -i photo.jpg --probe
//! ```
use std::process::exit;

use clap::ArgMatches;
use log::error;

use tonemill_image::codecs::ImageFormat;
use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_imageprocs::apply::{apply_operation, OperationParams};

mod cmd_args;
mod cmd_parsers;
mod probe;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let result = run_command(&options);

    if let Err(reason) = result {
        println!();
        error!("Could not complete the request, reason: {reason:?}");

        println!();
        exit(-1);
    }
}

fn run_command(options: &ArgMatches) -> Result<(), ImageErrors> {
    let input = options.get_one::<String>("in").unwrap();

    let decoder_options = cmd_parsers::decoder_options(options);

    let mut image = Image::open(input, decoder_options)?;

    if options.get_flag("probe") {
        probe::print_info(input, &image);
        return Ok(());
    }

    let operation = options.get_one::<String>("operation").ok_or(
        ImageErrors::GenericStr("No operation specified, pass one with --operation")
    )?;
    let levels = *options.get_one::<u16>("levels").unwrap();

    apply_operation(operation, OperationParams { levels }, &mut image)?;

    let out = options
        .get_one::<String>("out")
        .ok_or(ImageErrors::GenericStr(
            "No output file specified, pass one with --out"
        ))?;

    image.save_to(out, ImageFormat::PPM)?;

    Ok(())
}
