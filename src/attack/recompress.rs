// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Lossy JPEG recompression attack.
//!
//! The carrier is first normalised through a quality-100 JPEG pass, then
//! re-encoded at the requested quality. Both passes use 4:4:4 sampling (the
//! `image` crate's JPEG encoder never subsamples chroma).

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use super::{check_range, AttackError, MAX_QUALITY};
use crate::stego::carrier::CarrierState;

/// Quality of the normalising first pass.
pub const NORMALIZE_QUALITY: u8 = 100;

/// Lowest quality the encoder accepts; requests of 0 are raised to this.
const MIN_ENCODER_QUALITY: u8 = 1;

/// Replace `working` with `original` after a JPEG round trip at `quality`.
///
/// Quality 0 gives the heaviest loss; 100 is close to lossless.
///
/// # Errors
/// - [`AttackError::ParameterOutOfRange`] if `quality > 100`.
/// - [`AttackError::Codec`] if encoding or decoding fails.
pub fn recompress(state: &mut CarrierState, quality: u8) -> Result<(), AttackError> {
    check_range("quality", f64::from(quality), f64::from(MAX_QUALITY))?;

    let normalized = jpeg_roundtrip(state.original(), NORMALIZE_QUALITY)?;
    let degraded = jpeg_roundtrip(&normalized, quality)?;

    tracing::debug!(quality, "recompressed carrier");
    state.set_working(degraded);
    Ok(())
}

/// Encode `img` as JPEG at `quality` and decode it again.
pub fn jpeg_roundtrip(img: &RgbImage, quality: u8) -> Result<RgbImage, image::ImageError> {
    let bytes = encode_jpeg(img, quality)?;
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg)?;
    Ok(decoded.to_rgb8())
}

/// Encode `img` as a baseline JPEG at `quality` (clamped to 1..=100).
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let quality = quality.clamp(MIN_ENCODER_QUALITY, MAX_QUALITY);
    let mut cursor = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut cursor, quality).encode_image(img)?;
    tracing::trace!(quality, bytes = cursor.get_ref().len(), "encoded JPEG");
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::psnr;
    use image::Rgb;

    fn textured(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([
                ((x * 7 + y * 3) % 256) as u8,
                ((x * y) % 256) as u8,
                (((x as f64 * 0.3).sin() * 100.0 + 128.0) as u8),
            ])
        })
    }

    #[test]
    fn roundtrip_keeps_dimensions() {
        let img = textured(33, 17);
        let out = jpeg_roundtrip(&img, 75).unwrap();
        assert_eq!(out.dimensions(), (33, 17));
    }

    #[test]
    fn lower_quality_loses_more() {
        let img = textured(64, 64);
        let hi = jpeg_roundtrip(&img, 95).unwrap();
        let lo = jpeg_roundtrip(&img, 5).unwrap();
        assert!(psnr(&img, &hi).unwrap() > psnr(&img, &lo).unwrap());
    }

    #[test]
    fn quality_zero_is_accepted() {
        let mut state = CarrierState::new(textured(16, 16)).unwrap();
        recompress(&mut state, 0).unwrap();
        assert_eq!(state.dimensions(), (16, 16));
    }

    #[test]
    fn quality_above_100_rejected() {
        let mut state = CarrierState::new(textured(8, 8)).unwrap();
        let err = recompress(&mut state, 101).unwrap_err();
        assert!(matches!(err, AttackError::ParameterOutOfRange { name: "quality", .. }));
        assert_eq!(state.working(), state.original());
    }
}
