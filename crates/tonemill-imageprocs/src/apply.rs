/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Named operation dispatch
//!
//! The service layer selects transforms by name, this module maps those
//! names onto the operation types and runs them. Names that match no
//! transform are rejected, parameters are only consulted by the
//! operations that take them
use log::trace;
use zune_core::colorspace::ColorSpace;

use tonemill_image::core_filters::colorspace::ColorspaceConv;
use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::equalize::Equalize;
use crate::grayscale::Grayscale;
use crate::high_pass::HighPass;
use crate::low_pass::LowPass;
use crate::quantize::{Quantize, DEFAULT_LEVELS};
use crate::sharpen::Sharpen;
use crate::smooth::Smooth;

/// Every operation name the engine understands
pub const OPERATION_NAMES: [&str; 7] = [
    "grayscale",
    "quantize",
    "histogram",
    "smooth",
    "sharpen",
    "highpass",
    "lowpass"
];

/// Caller supplied parameters for configurable operations
///
/// Only `quantize` reads anything from here
#[derive(Copy, Clone, Debug)]
pub struct OperationParams {
    /// Quantization levels in `[1,256]`
    pub levels: u16
}

impl Default for OperationParams {
    fn default() -> Self {
        OperationParams {
            levels: DEFAULT_LEVELS
        }
    }
}

/// Apply a named transform to an image
///
/// Alpha, when present on the input, is dropped before the transform
/// runs and is not restored afterwards, no operation here reads or
/// writes alpha.
///
/// # Errors
/// - [`ImageErrors::UnknownOperation`] for a name outside
///   [`OPERATION_NAMES`]
/// - [`ImageErrors::InvalidParameter`] when `quantize` is given levels
///   outside `[1,256]`
/// - Any error the operation itself raises
pub fn apply_operation(
    operation: &str, params: OperationParams, image: &mut Image
) -> Result<(), ImageErrors> {
    trace!("Applying operation {operation}");

    match image.colorspace() {
        ColorSpace::RGBA => ColorspaceConv::new(ColorSpace::RGB).execute(image)?,
        ColorSpace::LumaA => ColorspaceConv::new(ColorSpace::Luma).execute(image)?,
        _ => {}
    }

    match operation {
        "grayscale" => Grayscale::new().execute(image),
        "quantize" => Quantize::new(params.levels).execute(image),
        "histogram" => Equalize::new().execute(image),
        "smooth" => Smooth::new().execute(image),
        "sharpen" => Sharpen::new().execute(image),
        "highpass" => HighPass::new().execute(image),
        "lowpass" => LowPass::new().execute(image),
        _ => Err(ImageErrors::UnknownOperation(operation.to_string()))
    }
}
