/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram equalization
//!
//! Redistributes the intensities of each channel so that its cumulative
//! distribution becomes close to linear, stretching the used portion of
//! the range over the full `[0,255]`.
//!
//! Color images are equalized channel by channel against each channel's
//! own histogram. This is channel-independent equalization, not
//! luminance-only equalization, so the color balance of the output can
//! shift. That is the intended behavior, not an accident of the
//! implementation.
//!
//! The remap table for a channel is
//!
//! ```text
//! lut[v] = (cdf[v] - cdf_min) * 255 / (cdf_max - cdf_min)
//! ```
//!
//! computed in `f64` and truncated, where `cdf_min`/`cdf_max` are the
//! minimum and maximum of the (non-decreasing) cumulative histogram,
//! i.e. `cdf[0]` and `cdf[255]`. A channel whose every pixel sits at
//! intensity zero would divide by zero here, such channels are
//! returned unchanged
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::ImageErrors;
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::histogram::histogram;

/// Histogram equalization of each channel
#[derive(Default)]
pub struct Equalize;

impl Equalize {
    /// Create a new equalize operation
    #[must_use]
    pub fn new() -> Equalize {
        Equalize
    }
}

impl OperationsTrait for Equalize {
    fn name(&self) -> &'static str {
        "histogram equalization"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        for channel in image.channels_mut(true) {
            let histo = histogram(channel);

            let Some(lut) = equalize_lut(&histo) else {
                // flat channel at intensity zero, the remap is undefined,
                // leave the channel as it is
                continue;
            };

            // read the old plane, write a new one, the remap must never
            // observe its own output
            let mut out_channel = vec![0_u8; channel.len()];

            for (out_pix, pix) in out_channel.iter_mut().zip(channel.iter()) {
                *out_pix = lut[usize::from(*pix)];
            }
            *channel = out_channel;
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

/// Build the equalization remap table for one channel histogram
///
/// Returns `None` when the cumulative histogram is constant, the only
/// case where the normalization would divide by zero
#[must_use]
pub fn equalize_lut(histogram: &[u32; 256]) -> Option<[u8; 256]> {
    let mut cdf = [0_u64; 256];
    let mut running = 0_u64;

    for (sum, count) in cdf.iter_mut().zip(histogram.iter()) {
        running += u64::from(*count);
        *sum = running;
    }

    let cdf_min = cdf[0];
    let cdf_max = cdf[255];

    if cdf_max == cdf_min {
        return None;
    }
    let range = (cdf_max - cdf_min) as f64;

    let mut lut = [0_u8; 256];

    for (out, sum) in lut.iter_mut().zip(cdf.iter()) {
        *out = (((sum - cdf_min) as f64 * 255.0) / range) as u8;
    }
    Some(lut)
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use tonemill_image::image::Image;
    use tonemill_image::traits::OperationsTrait;

    use crate::equalize::{equalize_lut, Equalize};
    use crate::histogram::histogram;

    // a channel whose histogram already spans the whole range evenly
    // maps onto itself, the remap is exactly stable
    #[test]
    fn full_range_channel_is_stable() {
        let pixels: Vec<u8> = (0..=255).collect();
        let lut = equalize_lut(&histogram(&pixels)).unwrap();

        for (v, mapped) in lut.iter().enumerate() {
            assert_eq!(usize::from(*mapped), v);
        }
    }

    // every pixel at intensity zero is the divide-by-zero case, the
    // defined fallback is an unchanged image
    #[test]
    fn flat_black_image_is_unchanged() {
        let mut image = Image::fill(0, ColorSpace::Luma, 8, 8);

        Equalize::new().execute(&mut image).unwrap();

        assert!(image.channels_ref(false)[0].iter().all(|x| *x == 0));
    }

    // a flat channel at a non zero intensity does not divide by zero,
    // the formula sends the single used intensity to 255
    #[test]
    fn flat_gray_image_maps_to_white() {
        let mut image = Image::fill(128, ColorSpace::Luma, 8, 8);

        Equalize::new().execute(&mut image).unwrap();

        assert!(image.channels_ref(false)[0].iter().all(|x| *x == 255));
    }

    // two intensity values split the range according to their
    // cumulative counts
    #[test]
    fn two_level_image_stretches() {
        // 8 pixels of 10, 8 pixels of 200
        let mut pixels = vec![10_u8; 8];
        pixels.extend_from_slice(&[200; 8]);

        let lut = equalize_lut(&histogram(&pixels)).unwrap();

        // cdf[10] = 8, cdf[200] = 16, cdf_min = 0
        // lut[10] = 8 * 255 / 16 = 127.5 -> 127
        // lut[200] = 16 * 255 / 16 = 255
        assert_eq!(lut[10], 127);
        assert_eq!(lut[200], 255);
    }

    // each color channel is equalized independently
    #[test]
    fn color_channels_are_independent() {
        let mut image = Image::from_fn(4, 4, ColorSpace::RGB, |x, _, pix| {
            // red uses two values, green is flat at zero, blue is flat gray
            pix[0] = if x % 2 == 0 { 10 } else { 200 };
            pix[1] = 0;
            pix[2] = 77;
        });

        Equalize::new().execute(&mut image).unwrap();

        let channels = image.channels_ref(false);
        assert!(channels[0].iter().all(|x| *x == 127 || *x == 255));
        // untouched by the flat-black fallback
        assert!(channels[1].iter().all(|x| *x == 0));
        assert!(channels[2].iter().all(|x| *x == 255));
    }
}
