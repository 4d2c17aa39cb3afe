/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - separated `u8` channel planes
//!     - representing a colorspace
//!         - with the same width and height
//!
//! And that's how we represent images.
//! The engine works on 8 bit samples only, decoders that produce wider
//! samples narrow them before constructing an image
use zune_core::colorspace::ColorSpace;

use crate::deinterleave::deinterleave_u8;

/// Maximum supported color channels
pub const MAX_CHANNELS: usize = 4;

/// Represents a single image
#[derive(Clone)]
pub struct Image {
    pub(crate) channels:   Vec<Vec<u8>>,
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace
}

impl Image {
    /// Create a new image from separated channel planes
    ///
    /// # Panics
    /// - If the number of channels does not match the colorspace
    /// - If any channel plane length does not match `width * height`
    pub fn new(
        channels: Vec<Vec<u8>>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Image {
        assert_eq!(
            channels.len(),
            colorspace.num_components(),
            "Expected {} channels for {:?} but found {}",
            colorspace.num_components(),
            colorspace,
            channels.len()
        );
        for channel in &channels {
            assert_eq!(
                channel.len(),
                checked_mul(width, height, 1),
                "Channel plane length does not match image dimensions"
            );
        }

        Image {
            channels,
            width,
            height,
            colorspace
        }
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the colorspace this image is stored in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Set the image colorspace
    ///
    /// This only changes the metadata tag, the caller is responsible
    /// for making the channel planes agree with it
    pub fn set_colorspace(&mut self, colorspace: ColorSpace) {
        self.colorspace = colorspace;
    }

    /// Replace the image channel planes
    ///
    /// Used by operations that change the channel structure,
    /// e.g. grayscale conversion and alpha dropping
    pub fn set_channels(&mut self, channels: Vec<Vec<u8>>) {
        self.channels = channels;
    }

    /// Return a reference to the underlying channels
    ///
    /// When `ignore_alpha` is true the alpha plane, if any, is left out,
    /// which is what the pixel transforms want since alpha is never
    /// processed
    pub fn channels_ref(&self, ignore_alpha: bool) -> Vec<&Vec<u8>> {
        let color_channels = self.color_channel_count(ignore_alpha);

        self.channels.iter().take(color_channels).collect()
    }

    /// Return a mutable view into the image channels
    ///
    /// This gives mutable access to the channel data allowing
    /// manipulation of image pixels
    pub fn channels_mut(&mut self, ignore_alpha: bool) -> Vec<&mut Vec<u8>> {
        let color_channels = self.color_channel_count(ignore_alpha);

        self.channels.iter_mut().take(color_channels).collect()
    }

    fn color_channel_count(&self, ignore_alpha: bool) -> usize {
        let components = self.colorspace.num_components();

        if ignore_alpha && colorspace_has_alpha(self.colorspace) {
            components - 1
        } else {
            components
        }
    }

    /// Convert the image to an interleaved byte representation
    ///
    /// I.e. for an RGB image the returned layout is `[R,G,B,R,G,B]`
    pub fn to_u8(&self) -> Vec<u8> {
        let components = self.colorspace.num_components();
        let mut out = vec![0_u8; checked_mul(self.width, self.height, components)];

        for (i, channel) in self.channels.iter().enumerate() {
            for (out_pix, pix) in out[i..].iter_mut().step_by(components).zip(channel.iter()) {
                *out_pix = *pix;
            }
        }
        out
    }

    /// Create an image with a static color in it
    pub fn fill(pixel: u8, colorspace: ColorSpace, width: usize, height: usize) -> Image {
        let dims = checked_mul(width, height, 1);

        let channels = vec![vec![pixel; dims]; colorspace.num_components()];

        Image::new(channels, width, height, colorspace)
    }

    /// Create an image from a function
    ///
    /// The function will receive the current x and y offset plus a
    /// mutable array of [`MAX_CHANNELS`] pixel values, of which the
    /// first `colorspace.num_components()` are stored
    ///
    /// # Example
    /// ```
    /// use zune_core::colorspace::ColorSpace;
    /// use tonemill_image::image::Image;
    ///
    /// // a linear band of colors from black to white
    /// let img = Image::from_fn(30, 20, ColorSpace::Luma, |x, y, pix| {
    ///     pix[0] = ((x + y) % 256) as u8;
    /// });
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, colorspace: ColorSpace, func: F) -> Image
    where
        F: Fn(usize, usize, &mut [u8; MAX_CHANNELS])
    {
        let components = colorspace.num_components();
        let size = checked_mul(width, height, 1);

        let mut channels = vec![Vec::with_capacity(size); components];

        let mut value = [0_u8; MAX_CHANNELS];

        for y in 0..height {
            for x in 0..width {
                (func)(x, y, &mut value);

                for (channel, pix) in channels.iter_mut().zip(value.iter()) {
                    channel.push(*pix);
                }
            }
        }

        Image::new(channels, width, height, colorspace)
    }
}

// Conversions
impl Image {
    /// Create a new image from raw interleaved pixels
    ///
    /// Pixels are expected to be interleaved according to the colorspace,
    /// i.e. if the image is RGB, pixel layout should be `[R,G,B,R,G,B]`,
    /// if it's Luma with alpha, pixel layout should be `[L,A,L,A]`
    ///
    /// # Panics
    /// - In case calculating image dimensions overflows a [`usize`],
    ///   this indicates that the array cannot be indexed by usize, hence
    ///   values are invalid
    /// - If the length of pixels doesn't match the expected length
    pub fn from_u8(pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace) -> Image {
        let expected_len = checked_mul(width, height, colorspace.num_components());

        assert_eq!(
            pixels.len(),
            expected_len,
            "Length mismatch, expected {expected_len} but found {}",
            pixels.len()
        );

        let channels = deinterleave_u8(pixels, colorspace);

        Image::new(channels, width, height, colorspace)
    }
}

/// Return true if the colorspace carries an alpha plane
/// as its last channel
pub const fn colorspace_has_alpha(colorspace: ColorSpace) -> bool {
    matches!(colorspace, ColorSpace::RGBA | ColorSpace::LumaA)
}

fn checked_mul(width: usize, height: usize, components: usize) -> usize {
    width
        .checked_mul(height)
        .unwrap()
        .checked_mul(components)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::image::Image;

    #[test]
    fn interleave_roundtrip() {
        let pixels: Vec<u8> = (0..24).collect();
        let image = Image::from_u8(&pixels, 4, 2, ColorSpace::RGB);

        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.channels_ref(false).len(), 3);
        assert_eq!(image.to_u8(), pixels);
    }

    #[test]
    fn alpha_is_skipped_when_ignored() {
        let image = Image::fill(128, ColorSpace::RGBA, 2, 2);

        assert_eq!(image.channels_ref(true).len(), 3);
        assert_eq!(image.channels_ref(false).len(), 4);
    }

    #[test]
    fn from_fn_writes_each_pixel() {
        let image = Image::from_fn(3, 2, ColorSpace::Luma, |x, y, pix| {
            pix[0] = (x + y * 3) as u8;
        });

        assert_eq!(image.channels_ref(false)[0].as_slice(), &[0, 1, 2, 3, 4, 5]);
    }
}
