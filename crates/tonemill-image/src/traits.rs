/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by decoders, encoders and image operations
use log::trace;
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder
///
/// All supported image decoders must implement this trait
pub trait DecoderTrait {
    /// Decode the stream handed to the decoder at construction
    /// into an [`Image`]
    ///
    /// # Errors
    /// Any image decoding errors will be propagated to the caller
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// # Returns
    /// - `Some((width,height))`
    /// - `None` -> If image headers haven't been decoded and we can't
    ///    extract the width and height
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the colorspace that the decoded pixels are stored in
    fn out_colorspace(&self) -> ColorSpace;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// This encapsulates an image operation
///
/// An operation takes one image and transforms its pixel data in
/// place, allocating fresh channel planes where the data changes.
/// Every transform the engine exposes implements this trait
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// Callers should prefer [`execute`](OperationsTrait::execute) which
    /// validates the image colorspace before running
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Colorspaces the operation can run on
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// Validate the image against the operation's supported
    /// colorspaces and then execute it
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedColorspace`] when the image colorspace
    ///   is not one the operation understands
    /// - Any error the operation itself raises
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                colorspace,
                self.name(),
                self.supported_colorspaces()
            ));
        }
        trace!("Running operation {}", self.name());

        self.execute_impl(image)
    }
}

/// Encapsulates an image encoder
///
/// All supported encoders must implement this trait
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode an image whose colorspace is already known to be
    /// supported by this encoder
    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;

    /// Colorspaces the format can natively represent
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// The format this encoder writes
    fn format(&self) -> ImageFormat;

    /// Encode an image into this format, returning the encoded bytes
    ///
    /// When the image colorspace is not natively representable, the
    /// image is cloned and converted to the closest supported
    /// colorspace first, the passed image is left untouched
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let colorspace = image.colorspace();

        if self.supported_colorspaces().contains(&colorspace) {
            return self.encode_inner(image);
        }
        let target = match colorspace {
            ColorSpace::LumaA => ColorSpace::Luma,
            _ => ColorSpace::RGB
        };
        trace!(
            "Converting image from {:?} to {:?} for the {} encoder",
            colorspace,
            target,
            self.name()
        );

        let mut copy = image.clone();

        crate::core_filters::colorspace::ColorspaceConv::new(target).execute(&mut copy)?;

        self.encode_inner(&copy)
    }
}
