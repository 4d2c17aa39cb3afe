/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use log::{trace, warn};
use zune_core::bytestream::ZByteReader;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

/// An instance of a PPM decoder
///
/// The decoder can currently decode the binary P5 and P6 formats
/// with 8 bit samples
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    colorspace:      ColorSpace,
    options:         DecoderOptions
}

/// Errors possible during PPM decoding
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    InvalidHeader(String),
    UnsupportedImpl(String),
    LargeDimensions(usize, usize),
    TruncatedStream(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::UnsupportedImpl(val) => {
                writeln!(f, "Unsupported implementation: {val}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel payload, expected {expected} bytes but stream has {found}"
                )
            }
        }
    }
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use tonemill_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        let reader = ZByteReader::new(data);

        PPMDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader,
            colorspace: ColorSpace::Unknown,
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on error otherwise return nothing
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if !self.reader.has(2) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P' {
            let msg = format!("Expected P as first PPM byte but got '{}'", p as char);

            return Err(PPMDecodeErrors::Generic(msg));
        }

        let colorspace = match version {
            b'5' => ColorSpace::Luma,
            b'6' => ColorSpace::RGB,
            _ => {
                let msg = format!(
                    "Unsupported PPM version `{}`, supported versions are 5 and 6",
                    version as char
                );

                return Err(PPMDecodeErrors::Generic(msg));
            }
        };
        self.colorspace = colorspace;

        skip_spaces(&mut self.reader);
        self.width = self.get_integer();

        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        skip_spaces(&mut self.reader);

        self.height = self.get_integer();

        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }

        skip_spaces(&mut self.reader);
        let max_value = self.get_integer();
        // a single whitespace character separates the maxval from the raster
        skip_spaces(&mut self.reader);

        if max_value > 255 {
            let msg = format!("Sample value {max_value} greater than 255, only 8 bit samples are supported");

            return Err(PPMDecodeErrors::UnsupportedImpl(msg));
        }
        if max_value == 0 {
            return Err(PPMDecodeErrors::InvalidHeader(
                "Zero max sample value".to_string()
            ));
        }

        trace!("Colorspace: {:?}", self.colorspace);
        trace!("Width: {}, height: {}", self.width, self.height);

        self.decoded_headers = true;

        Ok(())
    }

    fn get_integer(&mut self) -> usize {
        let mut value = 0_usize;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                // if it overflows, we have bigger problems.
                value = value
                    .wrapping_mul(10_usize)
                    .wrapping_add(usize::from(byte - b'0'));
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }
        value
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }
    /// Return image dimensions as `(width,height)` or none if
    /// headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a ppm encoded stream and return its raw bytes
    ///
    /// Pixels are interleaved according to the image colorspace
    ///
    /// A stream whose payload is shorter than the header promises is
    /// recovered by zero filling the missing tail, unless the decoder
    /// was configured with
    /// [`strict_mode`](zune_core::options::DecoderOptions), in which case
    /// it is an error
    pub fn decode(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        if !self.decoded_headers {
            self.read_headers()?;
        }
        let size = self.width * self.height * self.colorspace.num_components();

        let remaining = self.reader.remaining();

        let mut data = vec![0_u8; size];

        if remaining < size {
            if self.options.get_strict_mode() {
                return Err(PPMDecodeErrors::TruncatedStream(size, remaining));
            }
            warn!(
                "Pixel payload is {} bytes short, zero filling the missing tail",
                size - remaining
            );
            data[..remaining].copy_from_slice(self.reader.peek_at(0, remaining).unwrap());
            self.reader.skip(remaining);

            return Ok(data);
        }

        if remaining > size {
            trace!("{} trailing bytes after pixel payload, ignoring", remaining - size);
        }
        data.copy_from_slice(self.reader.peek_at(0, size).unwrap());
        self.reader.skip(size);

        Ok(data)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment, skip the whole line
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::DecoderOptions;

    use crate::PPMDecoder;

    fn grayscale_4x4() -> Vec<u8> {
        let mut stream = b"P5 4 4 255 ".to_vec();
        stream.extend_from_slice(&[128; 16]);
        stream
    }

    #[test]
    fn decode_p5() {
        let stream = grayscale_4x4();
        let mut decoder = PPMDecoder::new(&stream);
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.get_dimensions(), Some((4, 4)));
        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::Luma));
        assert_eq!(pixels, vec![128; 16]);
    }

    #[test]
    fn decode_p6_with_comment() {
        let mut stream = b"P6\n# made by hand\n2 1\n255\n".to_vec();
        stream.extend_from_slice(&[255, 0, 0, 0, 255, 0]);

        let mut decoder = PPMDecoder::new(&stream);
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.get_colorspace(), Some(ColorSpace::RGB));
        assert_eq!(pixels, vec![255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn truncated_stream_is_zero_filled() {
        // header promises 16 bytes, stream carries 6
        let mut stream = b"P5 4 4 255 ".to_vec();
        stream.extend_from_slice(&[200; 6]);

        let mut decoder = PPMDecoder::new(&stream);
        let pixels = decoder.decode().unwrap();

        assert_eq!(&pixels[..6], &[200; 6]);
        assert_eq!(&pixels[6..], &[0; 10]);
    }

    #[test]
    fn truncated_stream_errors_in_strict_mode() {
        let mut stream = b"P5 4 4 255 ".to_vec();
        stream.extend_from_slice(&[200; 6]);

        let options = DecoderOptions::default().set_strict_mode(true);

        let mut decoder = PPMDecoder::new_with_options(options, &stream);

        assert!(decoder.decode().is_err());
    }

    #[test]
    fn sixteen_bit_samples_are_rejected() {
        let stream = b"P5 1 1 65535 ".to_vec();
        let mut decoder = PPMDecoder::new(&stream);

        assert!(decoder.decode().is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let mut decoder = PPMDecoder::new(b"definitely not a ppm");

        assert!(decoder.decode().is_err());
    }
}
