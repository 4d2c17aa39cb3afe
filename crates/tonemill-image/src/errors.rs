/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image handling
use std::fmt::{Debug, Formatter};

use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;

/// All possible image errors that can occur
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    #[cfg(feature = "jpeg")]
    JpegDecodeErrors(zune_jpeg::errors::DecodeErrors),
    #[cfg(feature = "png")]
    PngDecodeErrors(zune_png::error::PngDecodeErrors),
    #[cfg(feature = "ppm")]
    PpmDecodeErrors(tonemill_ppm::PPMDecodeErrors),

    /// The image format could not be determined from the stream
    UnknownImageFormat,
    /// A decoder for this format exists but was not included in the build
    ImageDecoderNotIncluded(ImageFormat),
    /// An encoder for this format exists but was not included in the build
    ImageEncoderNotIncluded(ImageFormat),
    /// An operation name that does not match any known transform
    UnknownOperation(String),
    /// A caller supplied parameter was outside its allowed range
    InvalidParameter(&'static str, String),
    /// A colorspace the operation cannot handle
    UnsupportedColorspace(ColorSpace, &'static str, &'static [ColorSpace]),
    DimensionsMisMatch(usize, usize),
    OperationsError(ImgOperationsErrors),
    EncodeErrors(ImgEncodeErrors),
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImgOperationsErrors {
    /// Wrong number of components
    WrongComponents(usize, usize),
    /// Channel layout does not match expected
    InvalidChannelLayout(&'static str),
    /// Generic errors
    Generic(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

/// All errors possible during image encoding
pub enum ImgEncodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    #[cfg(feature = "ppm")]
    PpmEncodeErrors(tonemill_ppm::PPMErrors)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "jpeg")]
            Self::JpegDecodeErrors(ref error) => {
                writeln!(f, "Jpeg decoding failed: {error:?}")
            }
            #[cfg(feature = "png")]
            Self::PngDecodeErrors(ref error) => {
                writeln!(f, "Png decoding failed: {error:?}")
            }
            #[cfg(feature = "ppm")]
            Self::PpmDecodeErrors(ref error) => {
                writeln!(f, "Ppm decoding failed: {error:?}")
            }
            Self::UnknownImageFormat => {
                writeln!(
                    f,
                    "Could not determine the image format from the stream contents"
                )
            }
            Self::ImageDecoderNotIncluded(format) => {
                writeln!(
                    f,
                    "A decoder for format {format:?} was not included in this build"
                )
            }
            Self::ImageEncoderNotIncluded(format) => {
                writeln!(
                    f,
                    "An encoder for format {format:?} was not included in this build"
                )
            }
            Self::UnknownOperation(name) => {
                writeln!(f, "Unknown operation \"{name}\"")
            }
            Self::InvalidParameter(name, reason) => {
                writeln!(f, "Invalid value for parameter \"{name}\": {reason}")
            }
            Self::UnsupportedColorspace(present, operation, supported) => {
                writeln!(f,"Unsupported colorspace {present:?} for the operation {operation}\nSupported colorspaces are {supported:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::OperationsError(ref error) => writeln!(f, "{error:?}"),

            Self::EncodeErrors(ref err) => writeln!(f, "{err:?}"),

            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

#[cfg(feature = "jpeg")]
impl From<zune_jpeg::errors::DecodeErrors> for ImageErrors {
    fn from(from: zune_jpeg::errors::DecodeErrors) -> Self {
        ImageErrors::JpegDecodeErrors(from)
    }
}

#[cfg(feature = "png")]
impl From<zune_png::error::PngDecodeErrors> for ImageErrors {
    fn from(from: zune_png::error::PngDecodeErrors) -> Self {
        ImageErrors::PngDecodeErrors(from)
    }
}

#[cfg(feature = "ppm")]
impl From<tonemill_ppm::PPMDecodeErrors> for ImageErrors {
    fn from(from: tonemill_ppm::PPMDecodeErrors) -> Self {
        ImageErrors::PpmDecodeErrors(from)
    }
}

#[cfg(feature = "ppm")]
impl From<tonemill_ppm::PPMErrors> for ImgEncodeErrors {
    fn from(error: tonemill_ppm::PPMErrors) -> Self {
        ImgEncodeErrors::PpmEncodeErrors(error)
    }
}

impl From<ImgOperationsErrors> for ImageErrors {
    fn from(from: ImgOperationsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<ImgEncodeErrors> for ImageErrors {
    fn from(from: ImgEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}

impl Debug for ImgOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChannelLayout(reason) => {
                writeln!(f, "{reason}")
            }
            Self::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::WrongComponents(expected, found) => {
                writeln!(f, "Expected {expected} components and found {found}")
            }
        }
    }
}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(ref string) => writeln!(f, "{string}"),
            Self::GenericStatic(ref string) => writeln!(f, "{string}"),
            Self::UnsupportedColorspace(ref found, ref expected) => {
                writeln!(
                    f,
                    "Found colorspace {found:?} but the encoder supports {expected:?}"
                )
            }
            #[cfg(feature = "ppm")]
            Self::PpmEncodeErrors(ref error) => {
                writeln!(f, "{error:?}")
            }
        }
    }
}
