/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PPM codec support, the engine's lossless transport format
use zune_core::colorspace::ColorSpace;

use tonemill_ppm::{PPMDecoder, PPMEncoder as PPMEnc};

use crate::codecs::ImageFormat;
use crate::errors::{ImageErrors, ImgEncodeErrors};
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

impl<'a> DecoderTrait for PPMDecoder<'a> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;

        let (width, height) = self.get_dimensions().unwrap_or((0, 0));
        let colorspace = self.get_colorspace().unwrap_or(ColorSpace::Unknown);

        Ok(Image::from_u8(&pixels, width, height, colorspace))
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.get_dimensions()
    }

    fn out_colorspace(&self) -> ColorSpace {
        self.get_colorspace().unwrap_or(ColorSpace::Unknown)
    }

    fn name(&self) -> &'static str {
        "ppm decoder"
    }
}

/// The engine's PPM encoder
#[derive(Copy, Clone, Default)]
pub struct PPMEncoder;

impl PPMEncoder {
    /// Create a new PPM encoder
    #[must_use]
    pub fn new() -> PPMEncoder {
        PPMEncoder
    }
}

impl EncoderTrait for PPMEncoder {
    fn name(&self) -> &'static str {
        "ppm encoder"
    }

    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let (width, height) = image.dimensions();
        let data = image.to_u8();

        let mut sink = Vec::new();

        PPMEnc::new(&mut sink)
            .encode_u8(width, height, image.colorspace(), &data)
            .map_err(<tonemill_ppm::PPMErrors as Into<ImgEncodeErrors>>::into)?;

        Ok(sink)
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::Luma, // p5
            ColorSpace::RGB   // p6
        ]
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PPM
    }
}
