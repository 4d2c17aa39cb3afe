/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sharpening filter
//!
//! A 3x3 Laplacian style kernel that adds the difference between a
//! pixel and its four neighbors back onto the pixel. Results outside
//! the sample range are clamped into `[0,255]`
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::convolve::Convolve;

#[rustfmt::skip]
const SHARPEN_WEIGHTS: [f32; 9] = [
     0.0, -1.0,  0.0,
    -1.0,  5.0, -1.0,
     0.0, -1.0,  0.0
];

/// 3x3 Laplacian sharpening
#[derive(Default)]
pub struct Sharpen;

impl Sharpen {
    /// Create a new sharpening filter
    #[must_use]
    pub fn new() -> Sharpen {
        Sharpen
    }
}

impl OperationsTrait for Sharpen {
    fn name(&self) -> &'static str {
        "sharpen"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        Convolve::new(SHARPEN_WEIGHTS.to_vec(), 1.0).execute_impl(image)
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

    use crate::sharpen::Sharpen;

    #[test]
    fn output_keeps_shape() {
        let mut image = Image::fill(80, ColorSpace::RGB, 9, 14);

        Sharpen::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (9, 14));
        assert_eq!(image.colorspace(), ColorSpace::RGB);
    }

    // a constant interior has nothing to sharpen, 5v - 4v = v
    #[test]
    fn constant_interior_is_unchanged() {
        let mut image = Image::fill(131, ColorSpace::Luma, 10, 10);

        Sharpen::new().execute(&mut image).unwrap();

        let channel = image.channels_ref(false)[0];
        for y in 1..9 {
            for x in 1..9 {
                assert_eq!(channel[y * 10 + x], 131);
            }
        }
    }

    // extreme neighborhoods must clamp on both ends instead of wrapping
    #[test]
    fn extremes_are_clamped() {
        // one white pixel on black
        let mut image = Image::from_fn(7, 7, ColorSpace::Luma, |x, y, pix| {
            pix[0] = u8::from(x == 3 && y == 3) * 255;
        });

        Sharpen::new().execute(&mut image).unwrap();

        let channel = image.channels_ref(false)[0];
        // center: 5 * 255 - 0 = 1275, clamped to 255
        assert_eq!(channel[3 * 7 + 3], 255);
        // direct neighbor: 0 * 5 - 255 = -255, clamped to 0
        assert_eq!(channel[3 * 7 + 2], 0);

        // a constant white image keeps every value inside the range,
        // including at the zero padded corners where 5*255 - 2*255 = 765
        let mut white = Image::fill(255, ColorSpace::Luma, 8, 8);
        Sharpen::new().execute(&mut white).unwrap();
        assert_eq!(white.channels_ref(false)[0][0], 255);
    }
}
