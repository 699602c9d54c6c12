// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Rotate-and-correct attack with bilinear resampling.
//!
//! The carrier is rotated counter-clockwise onto an expanded canvas (so no
//! corner is clipped), rotated back on that same canvas, then centre-cropped
//! to its original size. The net geometry is the identity; the two
//! resampling passes are the distortion under test.
//!
//! Resampling inverse-maps each output pixel centre to source coordinates and
//! bilinear-interpolates the four nearest source pixels. Samples outside the
//! source are black.
//!
//! The desktop tool this attack reproduces rotates with nearest-neighbour
//! sampling. Bilinear blurs each pass slightly more, so PSNR after rotation
//! is not directly comparable with numbers reported by that tool.

use image::{Rgb, RgbImage};

use super::{check_range, AttackError, MAX_ROTATION_DEGREES};
use crate::stego::carrier::CarrierState;

/// Rotate `original` by `degrees`, rotate back, crop to the original size.
///
/// # Errors
/// [`AttackError::ParameterOutOfRange`] unless `0 <= degrees <= 90`.
pub fn rotate(state: &mut CarrierState, degrees: f64) -> Result<(), AttackError> {
    check_range("degrees", degrees, MAX_ROTATION_DEGREES)?;

    let original = state.original();
    let (w, h) = original.dimensions();

    let expanded = rotate_expand(original, degrees);
    let (ew, eh) = expanded.dimensions();
    let restored = resample_rotation(&expanded, -degrees.to_radians(), ew, eh);
    let cropped = crop_centered(&restored, w, h);

    tracing::debug!(degrees, expanded_w = ew, expanded_h = eh, "rotated and restored carrier");
    state.set_working(cropped);
    Ok(())
}

/// Canvas size that holds a `w`×`h` image rotated by `degrees`.
pub fn expanded_size(w: u32, h: u32, degrees: f64) -> (u32, u32) {
    let (sin_t, cos_t) = degrees.to_radians().sin_cos();
    let (sin_t, cos_t) = (sin_t.abs(), cos_t.abs());
    let (wf, hf) = (f64::from(w), f64::from(h));
    // Shave off float noise so 0° and 90° do not grow by a pixel.
    let ew = (wf * cos_t + hf * sin_t - 1e-6).ceil().max(1.0);
    let eh = (wf * sin_t + hf * cos_t - 1e-6).ceil().max(1.0);
    (ew as u32, eh as u32)
}

/// Rotate counter-clockwise by `degrees` onto an expanded canvas.
pub fn rotate_expand(img: &RgbImage, degrees: f64) -> RgbImage {
    let (w, h) = img.dimensions();
    let (ew, eh) = expanded_size(w, h, degrees);
    resample_rotation(img, degrees.to_radians(), ew, eh)
}

/// Cut a `w`×`h` window out of the centre of `img`. Parts of the window that
/// fall outside `img` are black.
pub fn crop_centered(img: &RgbImage, w: u32, h: u32) -> RgbImage {
    let (sw, sh) = img.dimensions();
    let left = (i64::from(sw) - i64::from(w)).div_euclid(2);
    let top = (i64::from(sh) - i64::from(h)).div_euclid(2);
    RgbImage::from_fn(w, h, |x, y| {
        let sx = i64::from(x) + left;
        let sy = i64::from(y) + top;
        if sx >= 0 && sy >= 0 && sx < i64::from(sw) && sy < i64::from(sh) {
            *img.get_pixel(sx as u32, sy as u32)
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Rotate `img` counter-clockwise by `rotation_rad` about its centre onto a
/// `dst_w`×`dst_h` canvas sharing that centre.
fn resample_rotation(img: &RgbImage, rotation_rad: f64, dst_w: u32, dst_h: u32) -> RgbImage {
    let (src_w, src_h) = img.dimensions();
    let (sin_t, cos_t) = rotation_rad.sin_cos();

    let src_cx = f64::from(src_w) / 2.0;
    let src_cy = f64::from(src_h) / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    RgbImage::from_fn(dst_w, dst_h, |dx, dy| {
        // Offset of the destination pixel centre from the canvas centre.
        let x = f64::from(dx) + 0.5 - dst_cx;
        let y = f64::from(dy) + 0.5 - dst_cy;

        // Inverse of a counter-clockwise turn in y-down coordinates.
        let xr = x * cos_t - y * sin_t;
        let yr = x * sin_t + y * cos_t;

        // Back to source pixel-index space.
        let sx = xr + src_cx - 0.5;
        let sy = yr + src_cy - 0.5;

        let v = bilinear_sample(img, sx, sy);
        Rgb(v.map(|c| c.round().clamp(0.0, 255.0) as u8))
    })
}

/// Sample all three channels at `(x, y)` with bilinear interpolation.
fn bilinear_sample(img: &RgbImage, x: f64, y: f64) -> [f64; 3] {
    let (w, h) = img.dimensions();
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let get = |px: i64, py: i64| -> [f64; 3] {
        if px >= 0 && px < i64::from(w) && py >= 0 && py < i64::from(h) {
            img.get_pixel(px as u32, py as u32).0.map(f64::from)
        } else {
            [0.0; 3]
        }
    };

    let v00 = get(x0, y0);
    let v10 = get(x0 + 1, y0);
    let v01 = get(x0, y0 + 1);
    let v11 = get(x0 + 1, y0 + 1);

    let mut out = [0.0; 3];
    for c in 0..3 {
        out[c] = v00[c] * (1.0 - fx) * (1.0 - fy)
            + v10[c] * fx * (1.0 - fy)
            + v01[c] * (1.0 - fx) * fy
            + v11[c] * fx * fy;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::psnr;

    fn smooth(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([
                (60 + x * 2) as u8,
                (60 + y * 2) as u8,
                (100 + (x + y)) as u8,
            ])
        })
    }

    #[test]
    fn expanded_size_at_known_angles() {
        assert_eq!(expanded_size(64, 32, 0.0), (64, 32));
        assert_eq!(expanded_size(64, 32, 90.0), (32, 64));
        // 45°: (64 + 32) / sqrt(2) = 67.88 -> 68
        assert_eq!(expanded_size(64, 32, 45.0), (68, 68));
    }

    #[test]
    fn zero_rotation_is_exact() {
        let img = smooth(20, 12);
        assert_eq!(rotate_expand(&img, 0.0), img);
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(3, 0, Rgb([255, 0, 0]));
        let turned = rotate_expand(&img, 90.0);
        assert_eq!(turned.dimensions(), (2, 4));
        // Top-right corner moves to top-left.
        assert_eq!(turned.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn crop_centered_pads_and_trims() {
        let img = RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]));
        let bigger = crop_centered(&img, 6, 4);
        assert_eq!(bigger.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(bigger.get_pixel(1, 0), &Rgb([9, 9, 9]));
        let smaller = crop_centered(&img, 2, 2);
        assert!(smaller.pixels().all(|p| *p == Rgb([9, 9, 9])));
    }

    #[test]
    fn rotate_and_restore_keeps_size_and_centre() {
        let mut state = CarrierState::new(smooth(40, 30)).unwrap();
        rotate(&mut state, 30.0).unwrap();
        assert_eq!(state.dimensions(), (40, 30));

        // Interior pixels come back close to the original.
        let (orig, work) = (state.original(), state.working());
        for y in 10..20 {
            for x in 12..28 {
                for c in 0..3 {
                    let d = (orig.get_pixel(x, y)[c] as i32 - work.get_pixel(x, y)[c] as i32).abs();
                    assert!(d <= 3, "({x},{y}) channel {c} differs by {d}");
                }
            }
        }
        assert!(psnr(orig, work).unwrap() < 100.0);
    }

    #[test]
    fn angle_out_of_range() {
        let mut state = CarrierState::new(smooth(8, 8)).unwrap();
        assert!(rotate(&mut state, -1.0).is_err());
        assert!(rotate(&mut state, 90.5).is_err());
        assert!(rotate(&mut state, 90.0).is_ok());
    }
}
