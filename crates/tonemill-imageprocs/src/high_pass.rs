/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! High pass filter, edge detection
//!
//! A 3x3 Laplacian kernel whose weights sum to zero, flat regions go to
//! black and intensity discontinuities survive. Results are clamped
//! into `[0,255]`
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::convolve::Convolve;

#[rustfmt::skip]
const HIGH_PASS_WEIGHTS: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  8.0, -1.0,
    -1.0, -1.0, -1.0
];

/// 3x3 Laplacian edge detection
#[derive(Default)]
pub struct HighPass;

impl HighPass {
    /// Create a new high pass filter
    #[must_use]
    pub fn new() -> HighPass {
        HighPass
    }
}

impl OperationsTrait for HighPass {
    fn name(&self) -> &'static str {
        "highpass"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        Convolve::new(HIGH_PASS_WEIGHTS.to_vec(), 1.0).execute_impl(image)
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::Luma,
            ColorSpace::LumaA,
            ColorSpace::RGB,
            ColorSpace::RGBA
        ]
    }
}
