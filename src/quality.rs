// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Peak signal-to-noise ratio between two equally sized RGB images.

use image::RgbImage;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::stego::error::StegoError;

/// Score reported when the images are identical (MSE == 0).
pub const PSNR_IDENTICAL: f64 = 100.0;

/// Peak sample value for 8-bit images.
pub const MAX_SAMPLE_VALUE: f64 = 255.0;

/// PSNR in decibels with an 8-bit peak value.
///
/// Returns [`PSNR_IDENTICAL`] when the images are equal.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if the images differ in dimensions.
pub fn psnr(a: &RgbImage, b: &RgbImage) -> Result<f64, StegoError> {
    psnr_with_peak(a, b, MAX_SAMPLE_VALUE)
}

/// PSNR in decibels for an arbitrary peak value: `20 * log10(peak / sqrt(mse))`.
pub fn psnr_with_peak(a: &RgbImage, b: &RgbImage, peak: f64) -> Result<f64, StegoError> {
    let mse = mean_squared_error(a, b)?;
    if mse == 0.0 {
        return Ok(PSNR_IDENTICAL);
    }
    Ok(20.0 * (peak / mse.sqrt()).log10())
}

/// Mean squared error over every sample of both images.
///
/// Squared differences are summed as integers so the result does not depend
/// on summation order.
pub fn mean_squared_error(a: &RgbImage, b: &RgbImage) -> Result<f64, StegoError> {
    if a.dimensions() != b.dimensions() {
        return Err(StegoError::ShapeMismatch {
            expected: a.dimensions(),
            actual: b.dimensions(),
        });
    }

    let samples = a.as_raw().len();
    if samples == 0 {
        return Ok(0.0);
    }

    let sq = |(&x, &y): (&u8, &u8)| {
        let d = i64::from(x) - i64::from(y);
        (d * d) as u64
    };

    #[cfg(feature = "parallel")]
    let total: u64 = a.as_raw().par_iter().zip(b.as_raw().par_iter()).map(sq).sum();
    #[cfg(not(feature = "parallel"))]
    let total: u64 = a.as_raw().iter().zip(b.as_raw().iter()).map(sq).sum();

    Ok(total as f64 / samples as f64)
}
