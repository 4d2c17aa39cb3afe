/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Low pass filter, a 5x5 averaging blur
//!
//! The wider window gives a stronger blur than [`Smooth`](crate::smooth::Smooth),
//! the same unit-weights-plus-reciprocal-scale construction keeps a
//! constant region away from the borders exactly stable
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::convolve::Convolve;

const LOW_PASS_WEIGHTS: [f32; 25] = [1.0; 25];

/// 5x5 box average blur
#[derive(Default)]
pub struct LowPass;

impl LowPass {
    /// Create a new low pass filter
    #[must_use]
    pub fn new() -> LowPass {
        LowPass
    }
}

impl OperationsTrait for LowPass {
    fn name(&self) -> &'static str {
        "lowpass"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        Convolve::new(LOW_PASS_WEIGHTS.to_vec(), 1.0 / 25.0).execute_impl(image)
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
