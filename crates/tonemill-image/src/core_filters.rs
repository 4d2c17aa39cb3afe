/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core filters always present in the image crate
//!
//! These are operations the codec and dispatch layers themselves depend
//! on, as opposed to the pixel transforms which live in their own crate
pub mod colorspace;
