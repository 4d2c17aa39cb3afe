/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JPEG decoding support via `zune-jpeg`
//!
//! Decode only, processed images leave the engine in a lossless format.
//!
//! With [`strict_mode`](zune_core::options::DecoderOptions) off, which is
//! the default, the underlying decoder completes truncated streams with
//! whatever scans it managed to read, so partially uploaded files still
//! produce an image
use zune_core::colorspace::ColorSpace;
use zune_jpeg::JpegDecoder;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::DecoderTrait;

impl<'a> DecoderTrait for JpegDecoder<'a> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;

        let colorspace = self.get_output_colorspace().unwrap_or(ColorSpace::Unknown);
        let (width, height) = self
            .dimensions()
            .map(|(w, h)| (usize::from(w), usize::from(h)))
            .unwrap_or((0, 0));

        Ok(Image::from_u8(&pixels, width, height, colorspace))
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        JpegDecoder::dimensions(self).map(|(w, h)| (usize::from(w), usize::from(h)))
    }

    fn out_colorspace(&self) -> ColorSpace {
        self.get_output_colorspace().unwrap_or(ColorSpace::Unknown)
    }

    fn name(&self) -> &'static str {
        "jpeg decoder (zune-jpeg)"
    }
}
