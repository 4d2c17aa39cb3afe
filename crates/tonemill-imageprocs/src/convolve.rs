/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This is the shared primitive behind the spatial filters, a
//! zero padded sliding-window weighted sum (a correlation, the kernel is
//! not flipped) for 3x3 and 5x5 kernels.
//!
//! The intermediate calculations are carried in `f32`, the result is
//! multiplied by the kernel scale, clamped into `[0,255]` and truncated
//! back to `u8`.
//!
//! # Alpha channel
//! - Alpha channel is ignored
//!
//! # Example
//! - Convolve with a 3x3 filter matrix
//!
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use tonemill_image::errors::ImageErrors;
//! use tonemill_image::image::Image;
//! use tonemill_image::traits::OperationsTrait;
//! use tonemill_imageprocs::convolve::Convolve;
//! let matrix = vec![1.0, -1.0,  1.0,
//!                  -1.0,  1.0, -1.0,
//!                   1.0, -1.0,  1.0];
//! // scale is multiplied by the result of the convolution, let's use
//! // the reciprocal of the matrix sum
//! let scale = 1.0 / matrix.iter().sum::<f32>();
//!
//! let mut image = Image::fill(128, ColorSpace::Luma, 100, 100);
//! // convolve finally
//! Convolve::new(matrix, scale).execute(&mut image)?;
//! # Ok::<(), ImageErrors>(())
//! ```
use zune_core::colorspace::ColorSpace;

use tonemill_image::errors::{ImageErrors, ImgOperationsErrors};
use tonemill_image::image::Image;
use tonemill_image::traits::OperationsTrait;

use crate::pad::pad_constant;

/// Convolve an image
///
/// The weights length chooses the kernel size, 9 weights run a 3x3
/// window, 25 weights run a 5x5 window, anything else is an error
pub struct Convolve {
    weights: Vec<f32>,
    scale:   f32
}

impl Convolve {
    /// Create a new convolve matrix, this supports 3x3 and 5x5 matrices
    ///
    /// The operation will return an error if the weights length
    /// isn't 9 (3x3) or 25 (5x5)
    #[must_use]
    pub fn new(weights: Vec<f32>, scale: f32) -> Convolve {
        Convolve { weights, scale }
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        for channel in image.channels_mut(true) {
            let mut out_channel = vec![0_u8; width * height];

            convolve(
                channel,
                &mut out_channel,
                width,
                height,
                &self.weights,
                self.scale
            )
            .map_err(ImgOperationsErrors::Generic)?;

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

fn convolve_3x3_inner(in_array: &[u8; 9], weights: &[f32; 9], scale: f32) -> u8 {
    let sum = in_array
        .iter()
        .zip(weights)
        .map(|(x, weight)| f32::from(*x) * weight)
        .sum::<f32>()
        * scale;

    sum.clamp(0.0, 255.0) as u8
}

fn convolve_5x5_inner(in_array: &[u8; 25], weights: &[f32; 25], scale: f32) -> u8 {
    let sum = in_array
        .iter()
        .zip(weights)
        .map(|(x, weight)| f32::from(*x) * weight)
        .sum::<f32>()
        * scale;

    sum.clamp(0.0, 255.0) as u8
}

/// Convolve a single channel plane with a 3x3 matrix
pub fn convolve_3x3(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[f32; 9],
    scale: f32
) {
    let padded_input = pad_constant(in_channel, width, height, 1, 1);

    spatial_window::<_, 1, 9>(
        &padded_input,
        out_channel,
        width,
        height,
        convolve_3x3_inner,
        weights,
        scale
    );
}

/// Convolve a single channel plane with a 5x5 matrix
pub fn convolve_5x5(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[f32; 25],
    scale: f32
) {
    let padded_input = pad_constant(in_channel, width, height, 2, 2);

    spatial_window::<_, 2, 25>(
        &padded_input,
        out_channel,
        width,
        height,
        convolve_5x5_inner,
        weights,
        scale
    );
}

/// Select a convolve matrix based on the weights length
pub fn convolve(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[f32],
    scale: f32
) -> Result<(), &'static str> {
    if weights.len() == 9 {
        convolve_3x3(
            in_channel,
            out_channel,
            width,
            height,
            weights.try_into().unwrap(),
            scale
        );
    } else if weights.len() == 25 {
        convolve_5x5(
            in_channel,
            out_channel,
            width,
            height,
            weights.try_into().unwrap(),
            scale
        );
    } else {
        return Err("Not implemented, only works for 3x3 and 5x5 kernels");
    }
    Ok(())
}

/// A spatial function that takes advantage of const generics to
/// run the sliding kernel window over a padded plane
///
/// `in_channel` is the zero padded plane, `out_channel` the un-padded
/// output of `width * height` pixels
fn spatial_window<F, const RADIUS: usize, const OUT_SIZE: usize>(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, function: F,
    values: &[f32; OUT_SIZE], scale: f32
) where
    F: Fn(&[u8; OUT_SIZE], &[f32; OUT_SIZE], f32) -> u8
{
    let old_width = width;
    let height = (RADIUS * 2) + height;
    let width = (RADIUS * 2) + width;

    assert_eq!(height * width, in_channel.len());

    let radius_size = (2 * RADIUS) + 1;

    let mut local_storage = [0_u8; OUT_SIZE];

    for y in RADIUS..height - RADIUS {
        for x in RADIUS..width - RADIUS {
            let iy = y - RADIUS;
            let ix = x - RADIUS;

            let mut i = 0;

            for ky in 0..radius_size {
                let iy_i = iy + ky;

                let in_slice = &in_channel[(iy_i * width) + ix..(iy_i * width) + ix + radius_size];
                local_storage[i..i + radius_size].copy_from_slice(in_slice);

                i += radius_size;
            }

            let result = function(&local_storage, values, scale);

            out_channel[iy * old_width + ix] = result;
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::convolve::{convolve_3x3, convolve_5x5};

    // test that 3x3 convolution works
    #[test]
    fn convolve_3x3_test() {
        let (width, height) = (100, 100);
        let mut data = vec![0_u8; width * height];
        let mut out = vec![13; width * height];
        nanorand::WyRand::new().fill(&mut data);
        convolve_3x3(&data, &mut out, width, height, &[0.0; 9], 1.);
        assert!(out.iter().all(|x| *x == 0));
    }

    #[test]
    fn convolve_5x5_test() {
        let (width, height) = (100, 100);
        let mut data = vec![0_u8; width * height];
        let mut out = vec![13; width * height];
        nanorand::WyRand::new().fill(&mut data);
        convolve_5x5(&data, &mut out, width, height, &[0.0; 25], 1.);
        assert!(out.iter().all(|x| *x == 0));
    }

    // an identity kernel returns the input unchanged, including at the
    // borders where the window reads the zero padding
    #[test]
    fn convolve_identity_kernel() {
        let (width, height) = (40, 25);
        let mut data = vec![0_u8; width * height];
        let mut out = vec![0; width * height];
        nanorand::WyRand::new().fill(&mut data);

        let mut identity = [0.0_f32; 9];
        identity[4] = 1.0;

        convolve_3x3(&data, &mut out, width, height, &identity, 1.);
        assert_eq!(data, out);
    }

    // intermediate sums run in f32, a kernel whose window sum exceeds
    // the u8 range must clamp instead of wrapping
    #[test]
    fn convolve_clamps_instead_of_wrapping() {
        let (width, height) = (8, 8);
        let data = vec![255_u8; width * height];
        let mut out = vec![0; width * height];

        convolve_3x3(&data, &mut out, width, height, &[2.0; 9], 1.);
        assert!(out.iter().all(|x| *x == 255));

        convolve_3x3(&data, &mut out, width, height, &[-2.0; 9], 1.);
        assert!(out.iter().all(|x| *x == 0));
    }
}
