/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! The codecs here can be enabled and disabled at will depending on the
//! configured interface, it is recommended that you only enable the
//! encoders and decoders that you use
//!
//! # Note on compatibility with images
//!
//! The library automatically tries to convert the image with highest
//! compatibility, e.g. encoding an image that still carries an alpha
//! plane into a format that cannot represent alpha converts a clone of
//! the image and leaves the current image as is, unmodified
#![allow(unused_variables, dead_code)]

use std::path::Path;

use log::trace;
use zune_core::options::DecoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "ppm")]
pub mod ppm;

/// All supported image formats
///
/// This enum contains supported image formats, either
/// encoders or decoders for a particular image
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Joint Photographic Experts Group
    JPEG,
    /// Portable Network Graphics
    PNG,
    /// Portable Pixel Map image
    PPM,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Return true if the format has a decoder included in this build
    #[must_use]
    pub fn has_decoder(self) -> bool {
        match self {
            ImageFormat::JPEG => cfg!(feature = "jpeg"),
            ImageFormat::PNG => cfg!(feature = "png"),
            ImageFormat::PPM => cfg!(feature = "ppm"),
            ImageFormat::Unknown => false
        }
    }

    /// Return true if the format has an encoder included in this build
    #[must_use]
    pub fn has_encoder(self) -> bool {
        // only lossless raster output is supported, jpeg and png
        // are decode only formats here
        matches!(self, ImageFormat::PPM) && cfg!(feature = "ppm")
    }

    /// Return the decoder for this format configured with `options`
    ///
    /// # Errors
    /// [`ImageErrors::ImageDecoderNotIncluded`] when the matching feature
    /// was not compiled in
    pub fn decoder_with_options<'a>(
        self, data: &'a [u8], options: DecoderOptions
    ) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors> {
        match self {
            ImageFormat::JPEG => {
                #[cfg(feature = "jpeg")]
                {
                    Ok(Box::new(zune_jpeg::JpegDecoder::new_with_options(
                        options, data
                    )))
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    Err(ImageErrors::ImageDecoderNotIncluded(self))
                }
            }
            ImageFormat::PNG => {
                #[cfg(feature = "png")]
                {
                    Ok(Box::new(png::PngDecoder::new(data, options)))
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::ImageDecoderNotIncluded(self))
                }
            }
            ImageFormat::PPM => {
                #[cfg(feature = "ppm")]
                {
                    Ok(Box::new(tonemill_ppm::PPMDecoder::new_with_options(
                        options, data
                    )))
                }
                #[cfg(not(feature = "ppm"))]
                {
                    Err(ImageErrors::ImageDecoderNotIncluded(self))
                }
            }
            ImageFormat::Unknown => Err(ImageErrors::UnknownImageFormat)
        }
    }

    /// Return an encoder for this format
    ///
    /// # Errors
    /// [`ImageErrors::ImageEncoderNotIncluded`] when the format has no
    /// encoder in this build
    pub fn encoder(self) -> Result<Box<dyn EncoderTrait>, ImageErrors> {
        match self {
            ImageFormat::PPM => {
                #[cfg(feature = "ppm")]
                {
                    Ok(Box::<ppm::PPMEncoder>::default())
                }
                #[cfg(not(feature = "ppm"))]
                {
                    Err(ImageErrors::ImageEncoderNotIncluded(self))
                }
            }
            _ => Err(ImageErrors::ImageEncoderNotIncluded(self))
        }
    }

    /// Guess the image format from the first bytes of the stream
    #[must_use]
    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::JPEG);
        }
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(ImageFormat::PNG);
        }
        if bytes.len() > 2
            && bytes[0] == b'P'
            && (bytes[1] == b'5' || bytes[1] == b'6')
            && bytes[2].is_ascii_whitespace()
        {
            return Some(ImageFormat::PPM);
        }
        None
    }
}

impl Image {
    /// Decode an in-memory byte stream into an image
    ///
    /// The format is guessed from the stream's magic bytes
    ///
    /// # Errors
    /// - [`ImageErrors::UnknownImageFormat`] when the stream matches no
    ///   known format
    /// - The underlying decoder's error when the stream is malformed
    pub fn read(bytes: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let format = ImageFormat::guess_format(bytes).ok_or(ImageErrors::UnknownImageFormat)?;

        trace!("Guessed image format to be {:?}", format);

        let mut decoder = format.decoder_with_options(bytes, options)?;

        decoder.decode()
    }

    /// Read an image from a file on disk
    ///
    /// See [`read`](Image::read) for the decoding semantics
    pub fn open<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let contents = std::fs::read(path.as_ref()).map_err(|e| {
            ImageErrors::GenericString(format!(
                "Could not read {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Image::read(&contents, options)
    }

    /// Encode the image into `format`, returning the encoded bytes
    ///
    /// # Errors
    /// - [`ImageErrors::ImageEncoderNotIncluded`] when the format cannot
    ///   be encoded by this build
    /// - Any encoder error
    pub fn write_to_vec(&self, format: ImageFormat) -> Result<Vec<u8>, ImageErrors> {
        let mut encoder = format.encoder()?;

        encoder.encode(self)
    }

    /// Encode the image into `format` and write it to a file
    pub fn save_to<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> Result<(), ImageErrors> {
        let contents = self.write_to_vec(format)?;

        std::fs::write(path.as_ref(), contents).map_err(|e| {
            ImageErrors::GenericString(format!(
                "Could not write {}: {e}",
                path.as_ref().display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::DecoderOptions;

    use crate::codecs::ImageFormat;
    use crate::image::Image;

    #[test]
    fn guess_format_magic_bytes() {
        assert_eq!(
            ImageFormat::guess_format(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::JPEG)
        );
        assert_eq!(
            ImageFormat::guess_format(b"\x89PNG\r\n\x1a\n....."),
            Some(ImageFormat::PNG)
        );
        assert_eq!(
            ImageFormat::guess_format(b"P6 2 2 255 "),
            Some(ImageFormat::PPM)
        );
        assert_eq!(ImageFormat::guess_format(b"GIF89a"), None);
    }

    #[test]
    fn unknown_stream_is_rejected() {
        let result = Image::read(b"not an image at all", DecoderOptions::default());

        assert!(result.is_err());
    }

    #[cfg(feature = "ppm")]
    #[test]
    fn read_write_roundtrip() {
        let image = Image::fill(90, ColorSpace::RGB, 3, 5);

        let encoded = image.write_to_vec(ImageFormat::PPM).unwrap();
        let decoded = Image::read(&encoded, DecoderOptions::default()).unwrap();

        assert_eq!(decoded.dimensions(), (3, 5));
        assert_eq!(decoded.colorspace(), ColorSpace::RGB);
        assert_eq!(decoded.to_u8(), image.to_u8());
    }

    #[cfg(feature = "ppm")]
    #[test]
    fn encode_drops_alpha_for_ppm() {
        let image = Image::fill(10, ColorSpace::RGBA, 2, 2);

        let encoded = image.write_to_vec(ImageFormat::PPM).unwrap();
        let decoded = Image::read(&encoded, DecoderOptions::default()).unwrap();

        assert_eq!(decoded.colorspace(), ColorSpace::RGB);
        // original image is untouched
        assert_eq!(image.colorspace(), ColorSpace::RGBA);
    }
}
