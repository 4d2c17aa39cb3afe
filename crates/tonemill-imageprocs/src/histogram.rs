/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram counts the number of pixels at each of the 256
//! possible intensities of one channel plane. It is the input to
//! histogram equalization and is rebuilt per call, nothing is cached

/// Compute the 256 bin histogram of one channel plane
///
/// Four separate count tables are filled and merged at the end, which
/// breaks the store-to-load dependency on a single table
#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    let mut count1 = [0_u32; 256];
    let mut count2 = [0_u32; 256];
    let mut count3 = [0_u32; 256];
    let mut count4 = [0_u32; 256];

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for pix in chunks {
        count1[usize::from(pix[0])] += 1;
        count2[usize::from(pix[1])] += 1;
        count3[usize::from(pix[2])] += 1;
        count4[usize::from(pix[3])] += 1;
    }
    for pix in remainder {
        count1[usize::from(*pix)] += 1;
    }
    // merge the split counts
    for (((a, b), c), d) in count1
        .iter_mut()
        .zip(count2.iter())
        .zip(count3.iter())
        .zip(count4.iter())
    {
        *a += b + c + d;
    }

    count1
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::histogram::histogram;

    #[test]
    fn histogram_counts_every_pixel() {
        let (w, h) = (400, 401);

        // randomize inputs, the odd dimension exercises the remainder loop
        let mut pixels = vec![0_u8; w * h];
        nanorand::WyRand::new().fill(&mut pixels);

        let histo = histogram(&pixels);

        assert_eq!(
            histo.iter().sum::<u32>(),
            u32::try_from(pixels.len()).unwrap_or(0)
        );
    }

    #[test]
    fn histogram_bins_match_values() {
        let pixels = [0, 0, 255, 7, 7, 7];
        let histo = histogram(&pixels);

        assert_eq!(histo[0], 2);
        assert_eq!(histo[7], 3);
        assert_eq!(histo[255], 1);
        assert_eq!(histo[128], 0);
    }
}
