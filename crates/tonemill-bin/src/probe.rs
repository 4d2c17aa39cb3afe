/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tonemill_image::image::Image;

/// Print image metadata as JSON to stdout
pub fn print_info(file: &str, image: &Image) {
    let (width, height) = image.dimensions();
    let colorspace = image.colorspace();

    let value = serde_json::json!({
        "file": file,
        "width": width,
        "height": height,
        "colorspace": format!("{colorspace:?}"),
        "channels": colorspace.num_components()
    });

    println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
}
