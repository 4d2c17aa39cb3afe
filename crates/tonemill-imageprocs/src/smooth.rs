/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Smoothing filter, a 3x3 box average
//!
//! Every output pixel is the mean of its 3x3 neighborhood. The window is
//! expressed as unit weights with a reciprocal scale so the window sum
//! stays an exact integer in `f32` before the final division, a constant
//! region away from the borders therefore survives unchanged
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::convolve::Convolve;

const SMOOTH_WEIGHTS: [f32; 9] = [1.0; 9];

/// 3x3 box average smoothing
#[derive(Default)]
pub struct Smooth;

impl Smooth {
    /// Create a new smoothing filter
    #[must_use]
    pub fn new() -> Smooth {
        Smooth
    }
}

impl OperationsTrait for Smooth {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        Convolve::new(SMOOTH_WEIGHTS.to_vec(), 1.0 / 9.0).execute_impl(image)
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

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use tonemill_image::image::Image;
    use tonemill_image::traits::OperationsTrait;

    use crate::smooth::Smooth;

    #[test]
    fn output_keeps_shape() {
        let mut image = Image::fill(17, ColorSpace::RGB, 31, 13);

        Smooth::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (31, 13));
        assert_eq!(image.colorspace(), ColorSpace::RGB);
    }

    // 4x4 constant image of 200, worked out by hand against the zero
    // padded window sums:
    // - corners see 4 image pixels:      4 * 200 / 9 = 88.8  -> 88
    // - edge pixels see 6 image pixels:  6 * 200 / 9 = 133.3 -> 133
    // - interior pixels see all 9:       9 * 200 / 9 = 200
    #[test]
    fn manual_4x4_window_sums() {
        let mut image = Image::fill(200, ColorSpace::Luma, 4, 4);

        Smooth::new().execute(&mut image).unwrap();

        #[rustfmt::skip]
        let expected: &[u8] = &[
             88, 133, 133,  88,
            133, 200, 200, 133,
            133, 200, 200, 133,
             88, 133, 133,  88,
        ];
        assert_eq!(image.channels_ref(false)[0].as_slice(), expected);
    }

    // the interior of a constant image is unaffected, only the outer
    // ring is darkened by the zero border
    #[test]
    fn constant_image_interior_is_stable() {
        let mut image = Image::fill(93, ColorSpace::Luma, 16, 16);

        Smooth::new().execute(&mut image).unwrap();

        let channel = image.channels_ref(false)[0];
        for y in 1..15 {
            for x in 1..15 {
                assert_eq!(channel[y * 16 + x], 93);
            }
        }
        // border attenuation is real and expected
        assert!(channel[0] < 93);
    }
}
