// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! RGB ↔ YCbCr conversion (ITU-R BT.601, full range).
//!
//! The forward transform truncates each result to 8 bits the way an integer
//! cast does, so it is lossy and not bit-exact on round trip. The inverse
//! clamps to [0, 255] before truncating. YCbCr samples are stored in an
//! [`RgbImage`] buffer with Y, Cb, Cr in slots 0, 1, 2.

use image::RgbImage;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Forward matrix rows for Y, Cb, Cr.
const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.1687, -0.3313, 0.5],
    [0.5, -0.4187, -0.0813],
];

/// Inverse matrix rows for R, G, B (applied after removing the chroma offset).
const YCBCR_TO_RGB: [[f64; 3]; 3] = [
    [1.0, 0.0, 1.402],
    [1.0, -0.34414, -0.71414],
    [1.0, 1.772, 0.0],
];

/// Offset added to Cb and Cr.
const CHROMA_OFFSET: f64 = 128.0;

/// Convert one RGB pixel to YCbCr.
#[inline]
pub fn rgb_pixel_to_ycbcr(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(f64::from);
    let mut out = [0u8; 3];
    for (i, row) in RGB_TO_YCBCR.iter().enumerate() {
        let mut v = row[0] * r + row[1] * g + row[2] * b;
        if i > 0 {
            v += CHROMA_OFFSET;
        }
        // Truncate toward zero, then wrap into 8 bits.
        out[i] = v as i32 as u8;
    }
    out
}

/// Convert one YCbCr pixel to RGB, clamping to [0, 255].
#[inline]
pub fn ycbcr_pixel_to_rgb(ycbcr: [u8; 3]) -> [u8; 3] {
    let y = f64::from(ycbcr[0]);
    let cb = f64::from(ycbcr[1]) - CHROMA_OFFSET;
    let cr = f64::from(ycbcr[2]) - CHROMA_OFFSET;
    let mut out = [0u8; 3];
    for (i, row) in YCBCR_TO_RGB.iter().enumerate() {
        let v = row[0] * y + row[1] * cb + row[2] * cr;
        out[i] = v.clamp(0.0, 255.0) as u8;
    }
    out
}

/// Convert a whole RGB image to YCbCr.
pub fn rgb_to_ycbcr(rgb: &RgbImage) -> RgbImage {
    map_pixels(rgb, rgb_pixel_to_ycbcr)
}

/// Convert a whole YCbCr image back to RGB.
pub fn ycbcr_to_rgb(ycbcr: &RgbImage) -> RgbImage {
    map_pixels(ycbcr, ycbcr_pixel_to_rgb)
}

fn map_pixels(src: &RgbImage, f: fn([u8; 3]) -> [u8; 3]) -> RgbImage {
    let (w, h) = src.dimensions();
    let mut out = RgbImage::new(w, h);
    let row_len = w as usize * 3;
    if row_len == 0 || h == 0 {
        return out;
    }

    let convert_row = |(dst, src): (&mut [u8], &[u8])| {
        for (d, s) in dst.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
            d.copy_from_slice(&f([s[0], s[1], s[2]]));
        }
    };

    let dst: &mut [u8] = &mut out;
    let src: &[u8] = src.as_raw();

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(convert_row);
    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(row_len)
        .zip(src.chunks(row_len))
        .for_each(convert_row);

    out
}
