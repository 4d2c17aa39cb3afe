/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Colorspace conversion routines
//!
//! The engine never processes alpha, so the only conversions carried
//! here are the alpha dropping ones, `RGBA -> RGB` and `LumaA -> Luma`.
//! The alpha plane is discarded and never restored.
use zune_core::colorspace::ColorSpace;

use crate::errors::{ImageErrors, ImgOperationsErrors};
use crate::image::{colorspace_has_alpha, Image};
use crate::traits::OperationsTrait;

/// Convert an image from one colorspace to another
///
/// Supported conversions are the identity and the ones that drop an
/// alpha plane
pub struct ColorspaceConv {
    to: ColorSpace
}

impl ColorspaceConv {
    /// Create a new colorspace converter targeting `to`
    #[must_use]
    pub fn new(to: ColorSpace) -> ColorspaceConv {
        ColorspaceConv { to }
    }
}

impl OperationsTrait for ColorspaceConv {
    fn name(&self) -> &'static str {
        "colorspace conversion"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let from = image.colorspace();

        if from == self.to {
            return Ok(());
        }

        match (from, self.to) {
            (ColorSpace::RGBA, ColorSpace::RGB) | (ColorSpace::LumaA, ColorSpace::Luma) => {
                // the alpha plane is the last channel for both layouts
                debug_assert!(colorspace_has_alpha(from));

                let mut channels = std::mem::take(&mut image.channels);
                channels.pop();

                image.set_channels(channels);
                image.set_colorspace(self.to);

                Ok(())
            }
            (_, _) => Err(ImageErrors::OperationsError(
                ImgOperationsErrors::GenericString(format!(
                    "Conversion from {from:?} to {:?} is not implemented",
                    self.to
                ))
            ))
        }
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
