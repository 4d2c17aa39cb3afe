/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert interleaved pixel layouts into separated channel planes
use zune_core::colorspace::ColorSpace;

/// Separate interleaved `u8` pixels into one plane per component
///
/// The inverse of [`Image::to_u8`](crate::image::Image::to_u8)
///
/// # Panics
/// If `pixels.len()` is not a multiple of the colorspace component count
pub fn deinterleave_u8(pixels: &[u8], colorspace: ColorSpace) -> Vec<Vec<u8>> {
    match colorspace.num_components() {
        1 => vec![pixels.to_vec()],
        2 => {
            let (mut c1, mut c2) = (Vec::new(), Vec::new());
            de_interleave_two_channels(pixels, &mut c1, &mut c2);
            vec![c1, c2]
        }
        3 => {
            let (mut c1, mut c2, mut c3) = (Vec::new(), Vec::new(), Vec::new());
            de_interleave_three_channels(pixels, &mut c1, &mut c2, &mut c3);
            vec![c1, c2, c3]
        }
        4 => {
            let (mut c1, mut c2, mut c3, mut c4) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
            de_interleave_four_channels(pixels, &mut c1, &mut c2, &mut c3, &mut c4);
            vec![c1, c2, c3, c4]
        }
        components => unreachable!("unexpected component count {components}")
    }
}

fn de_interleave_two_channels(source: &[u8], c1: &mut Vec<u8>, c2: &mut Vec<u8>) {
    assert_eq!(source.len() % 2, 0, "Source size must be divisible by 2");
    c1.reserve(source.len() / 2);
    c2.reserve(source.len() / 2);

    for pix in source.chunks_exact(2) {
        c1.push(pix[0]);
        c2.push(pix[1]);
    }
}

fn de_interleave_three_channels(
    source: &[u8], c1: &mut Vec<u8>, c2: &mut Vec<u8>, c3: &mut Vec<u8>
) {
    assert_eq!(source.len() % 3, 0, "Source size must be divisible by 3");
    c1.reserve(source.len() / 3);
    c2.reserve(source.len() / 3);
    c3.reserve(source.len() / 3);

    for pix in source.chunks_exact(3) {
        c1.push(pix[0]);
        c2.push(pix[1]);
        c3.push(pix[2]);
    }
}

fn de_interleave_four_channels(
    source: &[u8], c1: &mut Vec<u8>, c2: &mut Vec<u8>, c3: &mut Vec<u8>, c4: &mut Vec<u8>
) {
    assert_eq!(source.len() % 4, 0, "Source size must be divisible by 4");
    c1.reserve(source.len() / 4);
    c2.reserve(source.len() / 4);
    c3.reserve(source.len() / 4);
    c4.reserve(source.len() / 4);

    for pix in source.chunks_exact(4) {
        c1.push(pix[0]);
        c2.push(pix[1]);
        c3.push(pix[2]);
        c4.push(pix[3]);
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use crate::deinterleave::deinterleave_u8;

    #[test]
    fn three_channel_split() {
        let source = [1, 2, 3, 4, 5, 6];
        let channels = deinterleave_u8(&source, ColorSpace::RGB);

        assert_eq!(channels[0], vec![1, 4]);
        assert_eq!(channels[1], vec![2, 5]);
        assert_eq!(channels[2], vec![3, 6]);
    }

    #[test]
    fn four_channel_split() {
        let source = [1, 2, 3, 4, 5, 6, 7, 8];
        let channels = deinterleave_u8(&source, ColorSpace::RGBA);

        assert_eq!(channels[3], vec![4, 8]);
    }
}
