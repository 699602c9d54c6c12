// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Scaling attack.
//!
//! Unlike [`rotate`](super::rotate), the result is not restored to the
//! original size: `working` keeps the scaled dimensions, and any later decode
//! runs on that new shape.

use image::imageops::{self, FilterType};

use super::{check_range, AttackError, MAX_RESIZE_PERCENT};
use crate::stego::carrier::CarrierState;

/// Bicubic (Catmull-Rom) resampling.
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Scale `original` to `percent` of its width and height.
///
/// # Errors
/// [`AttackError::ParameterOutOfRange`] if `percent > 100`.
pub fn resize(state: &mut CarrierState, percent: u32) -> Result<(), AttackError> {
    check_range("percent", f64::from(percent), f64::from(MAX_RESIZE_PERCENT))?;

    let (w, h) = state.original().dimensions();
    let (nw, nh) = scaled_dimensions(w, h, percent);
    let scaled = imageops::resize(state.original(), nw, nh, RESIZE_FILTER);

    tracing::debug!(percent, from_w = w, from_h = h, to_w = nw, to_h = nh, "resized carrier");
    state.set_working(scaled);
    Ok(())
}

/// `floor(dim * percent / 100)` per axis, never below one pixel.
pub fn scaled_dimensions(w: u32, h: u32, percent: u32) -> (u32, u32) {
    let scale = |dim: u32| ((u64::from(dim) * u64::from(percent)) / 100).max(1) as u32;
    (scale(w), scale(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn scaled_dimension_rounding() {
        assert_eq!(scaled_dimensions(64, 64, 50), (32, 32));
        assert_eq!(scaled_dimensions(101, 33, 50), (50, 16));
        assert_eq!(scaled_dimensions(64, 48, 100), (64, 48));
        assert_eq!(scaled_dimensions(64, 48, 0), (1, 1));
    }

    #[test]
    fn half_size() {
        let img = RgbImage::from_pixel(64, 64, Rgb([120, 30, 200]));
        let mut state = CarrierState::new(img).unwrap();
        resize(&mut state, 50).unwrap();
        assert_eq!(state.dimensions(), (32, 32));
        assert_eq!(state.original().dimensions(), (64, 64));
        // A flat image stays flat under resampling.
        for p in state.working().pixels() {
            for (c, want) in [120i32, 30, 200].into_iter().enumerate() {
                assert!((p[c] as i32 - want).abs() <= 1, "channel {c}: {}", p[c]);
            }
        }
        assert_eq!(state.derived().dimensions(), (32, 32));
    }

    #[test]
    fn percent_above_100_rejected() {
        let mut state = CarrierState::new(RgbImage::new(4, 4)).unwrap();
        assert!(resize(&mut state, 150).is_err());
    }
}
