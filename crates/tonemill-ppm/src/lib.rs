/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! This crate handles the binary `P5` (grayscale) and `P6` (RGB)
//! variants of the netpbm family, with 8 bit samples.
//!
//! The decoder is deliberately lenient: a stream whose pixel payload is
//! shorter than the header promises is still decoded, with the missing
//! tail filled with zero (black) pixels, unless
//! [`DecoderOptions::strict_mode`](zune_core::options::DecoderOptions)
//! is set, in which case the same condition is a hard error.
//!
//! The encoder writes the matching lossless representation and is used as
//! the transport format for processed images.
mod decoder;
mod encoder;

pub use decoder::*;
pub use encoder::*;
