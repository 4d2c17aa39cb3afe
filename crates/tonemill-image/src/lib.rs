/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image part of the tonemill transform engine
//!
//! This crate provides the raster type shared by every transform, the
//! traits that decoders, encoders and operations implement, and the
//! codec dispatch that turns uploaded bytes into an [`Image`](crate::image::Image)
//! and an image back into transport bytes.
//!
//! An image is represented as separated `u8` channel planes of the same
//! width and height, tagged with the colorspace they were decoded from.
//! Alpha channels are carried but never processed, operations see only
//! the color planes.
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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod codecs;
pub mod core_filters;
pub mod deinterleave;
pub mod errors;
pub mod image;
pub mod traits;
