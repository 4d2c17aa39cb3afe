/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Intensity quantization
//!
//! Reduces the number of distinct intensity levels per channel.
//! With `levels` buckets the division factor is `256 / levels` (integer
//! division) and each sample is floored to the nearest lower multiple of
//! that factor:
//!
//! ```text
//! out = (v / factor) * factor
//! ```
//!
//! `levels = 256` leaves the image unchanged, `levels = 1` collapses
//! every sample to zero
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

/// Default number of quantization levels
pub const DEFAULT_LEVELS: u16 = 4;

/// Quantize each channel to a number of intensity levels
pub struct Quantize {
    levels: u16
}

impl Quantize {
    /// Create a new quantize operation with `levels` buckets
    ///
    /// `levels` must be in `[1,256]`, anything else is rejected when the
    /// operation executes
    #[must_use]
    pub fn new(levels: u16) -> Quantize {
        Quantize { levels }
    }
}

impl OperationsTrait for Quantize {
    fn name(&self) -> &'static str {
        "quantize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !(1..=256).contains(&self.levels) {
            return Err(ImageErrors::InvalidParameter(
                "levels",
                format!("expected a value in [1,256] but found {}", self.levels)
            ));
        }
        let factor = 256 / self.levels;

        let mut lut = [0_u8; 256];

        for (pix, out) in (0_u16..256).zip(lut.iter_mut()) {
            *out = ((pix / factor) * factor) as u8;
        }

        for channel in image.channels_mut(true) {
            for pix in channel.iter_mut() {
                *pix = lut[usize::from(*pix)];
            }
        }
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

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use zune_core::colorspace::ColorSpace;

    use tonemill_image::image::Image;
    use tonemill_image::traits::OperationsTrait;

    use crate::quantize::Quantize;

    #[test]
    fn four_levels_floors_to_multiples_of_64() {
        // factor = 64, 250 / 64 = 3, 3 * 64 = 192
        let mut image = Image::fill(250, ColorSpace::Luma, 1, 1);

        Quantize::new(4).execute(&mut image).unwrap();

        assert_eq!(image.channels_ref(false)[0][0], 192);
    }

    #[test]
    fn max_levels_is_identity() {
        let (w, h) = (64, 32);
        let mut pixels = vec![0_u8; w * h];
        nanorand::WyRand::new().fill(&mut pixels);

        let mut image = Image::from_u8(&pixels, w, h, ColorSpace::Luma);
        Quantize::new(256).execute(&mut image).unwrap();

        assert_eq!(image.channels_ref(false)[0], &pixels);
    }

    #[test]
    fn one_level_collapses_to_zero() {
        let (w, h) = (64, 32);
        let mut pixels = vec![0_u8; w * h];
        nanorand::WyRand::new().fill(&mut pixels);

        let mut image = Image::from_u8(&pixels, w, h, ColorSpace::Luma);
        Quantize::new(1).execute(&mut image).unwrap();

        assert!(image.channels_ref(false)[0].iter().all(|x| *x == 0));
    }

    // every output is an exact multiple of the factor and never above
    // the original sample
    #[test]
    fn outputs_are_floored_multiples() {
        let (w, h) = (100, 100);
        let mut pixels = vec![0_u8; w * h * 3];
        nanorand::WyRand::new().fill(&mut pixels);

        let mut image = Image::from_u8(&pixels, w, h, ColorSpace::RGB);
        Quantize::new(6).execute(&mut image).unwrap();

        let factor = 256 / 6;
        for (quantized, original) in image.to_u8().iter().zip(pixels.iter()) {
            assert_eq!(u16::from(*quantized) % factor, 0);
            assert!(quantized <= original);
        }
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let mut image = Image::fill(10, ColorSpace::Luma, 2, 2);

        assert!(Quantize::new(0).execute(&mut image).is_err());
        assert!(Quantize::new(257).execute(&mut image).is_err());
    }
}
