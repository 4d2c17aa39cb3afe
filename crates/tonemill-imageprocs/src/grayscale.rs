/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grayscale conversion
//!
//! Reduces the three color channels to a single luma channel using the
//! BT.601 weights
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//!
//! evaluated in Q15 fixed point. Images that are already grayscale are
//! returned as they are, which makes the operation idempotent
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

/// Convert an image to grayscale
#[derive(Default)]
pub struct Grayscale;

impl Grayscale {
    /// Create a new grayscale converter
    #[must_use]
    pub fn new() -> Grayscale {
        Grayscale
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if matches!(image.colorspace(), ColorSpace::Luma | ColorSpace::LumaA) {
            // already grayscale
            return Ok(());
        }
        let (width, height) = image.dimensions();

        let mut luma = vec![0_u8; width * height];
        {
            let channels = image.channels_ref(true);

            rgb_to_grayscale(
                (
                    channels[0].as_slice(),
                    channels[1].as_slice(),
                    channels[2].as_slice()
                ),
                &mut luma
            );
        }

        image.set_channels(vec![luma]);
        image.set_colorspace(ColorSpace::Luma);

        Ok(())
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

/// Reduce separated r, g and b planes to one luma plane
///
/// Weights are the BT.601 constants in Q15 fixed point, the per pixel
/// sum is rounded and narrowed back to `u8`
pub fn rgb_to_grayscale((r, g, b): (&[u8], &[u8], &[u8]), out: &mut [u8]) {
    let r_coef = (0.299 * 32768.0 + 0.5) as u32;
    let g_coef = (0.587 * 32768.0 + 0.5) as u32;
    let b_coef = (0.114 * 32768.0 + 0.5) as u32;

    for (((r_v, g_v), b_v), out_px) in r.iter().zip(g.iter()).zip(b.iter()).zip(out.iter_mut()) {
        let sum = u32::from(*r_v) * r_coef + u32::from(*g_v) * g_coef + u32::from(*b_v) * b_coef;

        *out_px = ((sum + (1 << 14)) >> 15).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use tonemill_image::image::Image;
    use tonemill_image::traits::OperationsTrait;

    use crate::grayscale::{rgb_to_grayscale, Grayscale};

    #[test]
    fn known_weighted_sums() {
        let mut out = [0_u8; 4];
        // white, black, pure red, pure green
        let r: &[u8] = &[255, 0, 255, 0];
        let g: &[u8] = &[255, 0, 0, 255];
        let b: &[u8] = &[255, 0, 0, 0];

        rgb_to_grayscale((r, g, b), &mut out);

        assert_eq!(out[0], 255);
        assert_eq!(out[1], 0);
        // 0.299 * 255 = 76.245
        assert_eq!(out[2], 76);
        // 0.587 * 255 = 149.685
        assert_eq!(out[3], 150);
    }

    #[test]
    fn color_image_becomes_single_channel() {
        let mut image = Image::fill(90, ColorSpace::RGB, 10, 6);

        Grayscale::new().execute(&mut image).unwrap();

        assert_eq!(image.colorspace(), ColorSpace::Luma);
        assert_eq!(image.dimensions(), (10, 6));
        assert_eq!(image.channels_ref(false).len(), 1);
        // equal weights sum to one, a gray color maps onto itself
        assert!(image.channels_ref(false)[0].iter().all(|x| *x == 90));
    }

    // grayscale(grayscale(img)) == grayscale(img)
    #[test]
    fn grayscale_is_idempotent() {
        let mut image = Image::from_fn(16, 16, ColorSpace::RGB, |x, y, pix| {
            pix[0] = (x * 16) as u8;
            pix[1] = (y * 16) as u8;
            pix[2] = ((x + y) * 8) as u8;
        });

        Grayscale::new().execute(&mut image).unwrap();
        let first = image.channels_ref(false)[0].clone();

        Grayscale::new().execute(&mut image).unwrap();
        let second = image.channels_ref(false)[0].clone();

        assert_eq!(first, second);
        assert_eq!(image.colorspace(), ColorSpace::Luma);
    }
}
