/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `tonemill-image`
//!
//! This implements the pixel transforms the engine exposes, one module
//! per operation, all built on the `OperationsTrait` defined by
//! tonemill-image.
//!
//! Every operation is stateless over its parameters: one input image in,
//! the transformed image out, nothing retained between calls. Alpha
//! planes are never read or written by any transform here.
//!
//! # Example
//! - Quantize an image down to 4 intensity levels
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use tonemill_image::image::Image;
//! use tonemill_image::traits::OperationsTrait;
//! use tonemill_imageprocs::quantize::Quantize;
//! let mut image = Image::fill(233, ColorSpace::RGB, 100, 100);
//! let quantize = Quantize::new(4);
//! // execute the filter
//! quantize.execute(&mut image).unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod apply;
pub mod convolve;
pub mod equalize;
pub mod grayscale;
pub mod high_pass;
pub mod histogram;
pub mod low_pass;
pub mod pad;
pub mod quantize;
pub mod sharpen;
pub mod smooth;
