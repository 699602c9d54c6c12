// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! File helpers for callers of the core.
//!
//! The codec, metric and attacks only see in-memory grids. These helpers
//! load and save them in any container the `image` crate understands. JPEG
//! output is written at quality 100 with 4:4:4 sampling so saved results
//! lose as little as the format allows.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, ImageResult, RgbImage};

use crate::stego::bitplane::BitMask;

/// JPEG quality used when saving results.
pub const SAVE_JPEG_QUALITY: u8 = 100;

/// Decode an image file and convert it to 8-bit RGB.
pub fn load_rgb(path: impl AsRef<Path>) -> ImageResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Decode an image file and convert it to 8-bit grayscale.
pub fn load_luma(path: impl AsRef<Path>) -> ImageResult<GrayImage> {
    Ok(image::open(path)?.to_luma8())
}

/// Load an image file as a binary pattern (non-zero luma → 1).
pub fn load_pattern(path: impl AsRef<Path>) -> ImageResult<BitMask> {
    Ok(BitMask::from_luma(&load_luma(path)?))
}

/// Save an RGB image; the format follows the file extension.
pub fn save_rgb(path: impl AsRef<Path>, img: &RgbImage) -> ImageResult<()> {
    let path = path.as_ref();
    if is_jpeg(path) {
        let mut out = BufWriter::new(File::create(path)?);
        JpegEncoder::new_with_quality(&mut out, SAVE_JPEG_QUALITY).encode_image(img)?;
        return Ok(());
    }
    img.save(path)
}

/// Save a binary pattern as a black/white image.
pub fn save_pattern(path: impl AsRef<Path>, mask: &BitMask) -> ImageResult<()> {
    mask.to_luma().save(path)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}
