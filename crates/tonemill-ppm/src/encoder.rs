/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};

use zune_core::colorspace::ColorSpace;

/// Errors occurring during encoding
pub enum PPMErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PPMErrors {
    fn from(err: Error) -> Self {
        PPMErrors::IoErrors(err)
    }
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

/// Supported PPM versions
pub enum PPMVersions {
    P5,
    P6
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P6 => write!(f, "P6"),
            Self::P5 => write!(f, "P5")
        }
    }
}

/// A PPM encoder
///
/// Writes 8 bit grayscale images as P5 and 8 bit RGB
/// images as P6
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, version: PPMVersions, width: usize, height: usize, max_val: usize
    ) -> Result<(), PPMErrors> {
        let header = format!("{version}\n{width}\n{height}\n{max_val}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as an 8 bit PPM stream
    ///
    /// Pixels are expected to be interleaved according to the colorspace,
    /// the version is derived from the colorspace, P5 for grayscale
    /// images and P6 for RGB ones
    pub fn encode_u8(
        &mut self, width: usize, height: usize, colorspace: ColorSpace, data: &[u8]
    ) -> Result<(), PPMErrors> {
        if width * height * colorspace.num_components() != data.len() {
            return Err(PPMErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        let version = get_ppm_version(colorspace)?;

        self.write_headers(version, width, height, 255)?;
        self.writer.write_all(data)?;

        Ok(())
    }
}

fn get_ppm_version(colorspace: ColorSpace) -> Result<PPMVersions, PPMErrors> {
    if colorspace == ColorSpace::Luma {
        Ok(PPMVersions::P5)
    } else if colorspace == ColorSpace::RGB {
        Ok(PPMVersions::P6)
    } else {
        Err(PPMErrors::Static("Unsupported colorspace for PPM"))
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::{PPMDecoder, PPMEncoder};

    #[test]
    fn encode_decode_roundtrip() {
        let pixels: Vec<u8> = (0..=255).collect();

        let mut sink = Vec::new();
        let mut encoder = PPMEncoder::new(&mut sink);
        encoder
            .encode_u8(16, 16, ColorSpace::Luma, &pixels)
            .unwrap();

        let mut decoder = PPMDecoder::new(&sink);
        let decoded = decoder.decode().unwrap();

        assert_eq!(decoder.get_dimensions(), Some((16, 16)));
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut sink = Vec::new();
        let mut encoder = PPMEncoder::new(&mut sink);

        assert!(encoder
            .encode_u8(4, 4, ColorSpace::RGB, &[0_u8; 10])
            .is_err());
    }

    #[test]
    fn alpha_colorspaces_are_rejected() {
        let mut sink = Vec::new();
        let mut encoder = PPMEncoder::new(&mut sink);

        assert!(encoder
            .encode_u8(1, 1, ColorSpace::RGBA, &[0_u8; 4])
            .is_err());
    }
}
