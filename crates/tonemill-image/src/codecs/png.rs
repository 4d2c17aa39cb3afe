/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG decoding support via `zune-png`
//!
//! Decode only. Sixteen bit images are narrowed to the engine's eight
//! bit samples by dropping the low byte, the same narrowing the original
//! service applied on ingest
use log::trace;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_core::result::DecodingResult;
use zune_png::PngDecoder as ZPngDecoder;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::DecoderTrait;

/// A PNG decoder carrying the engine's decoder options
///
/// `zune-png` has its own options type, so the shared
/// [`DecoderOptions`] limits are enforced here after header decode
pub struct PngDecoder<'a> {
    inner:   ZPngDecoder<'a>,
    options: DecoderOptions
}

impl<'a> PngDecoder<'a> {
    /// Create a new PNG decoder over `data`
    pub fn new(data: &'a [u8], options: DecoderOptions) -> PngDecoder<'a> {
        PngDecoder {
            inner: ZPngDecoder::new(data),
            options
        }
    }
}

impl<'a> DecoderTrait for PngDecoder<'a> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.inner.decode()?;

        let (width, height) = self.inner.get_dimensions().unwrap_or((0, 0));
        let colorspace = self.inner.get_colorspace().unwrap_or(ColorSpace::Unknown);

        if width > self.options.get_max_width() || height > self.options.get_max_height() {
            return Err(ImageErrors::GenericString(format!(
                "Image dimensions {width}x{height} above the configured limit {}x{}",
                self.options.get_max_width(), self.options.get_max_height()
            )));
        }

        match pixels {
            DecodingResult::U8(data) => Ok(Image::from_u8(&data, width, height, colorspace)),
            DecodingResult::U16(data) => {
                trace!("Narrowing 16 bit png samples to 8 bit");

                let narrowed: Vec<u8> = data.iter().map(|pix| (pix >> 8) as u8).collect();

                Ok(Image::from_u8(&narrowed, width, height, colorspace))
            }
            _ => Err(ImageErrors::GenericStr("Unsupported png sample layout"))
        }
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.inner.get_dimensions()
    }

    fn out_colorspace(&self) -> ColorSpace {
        self.inner.get_colorspace().unwrap_or(ColorSpace::Unknown)
    }

    fn name(&self) -> &'static str {
        "png decoder (zune-png)"
    }
}
