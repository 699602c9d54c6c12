// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Attacks against watermarked carriers.
//!
//! Every attack starts from the pristine carrier, so these tests also pin
//! down that attacks never compose and that an embedded watermark is lost
//! once an attack runs.

use image::{imageops, Rgb, RgbImage};

use lsbmark_core::attack::{self, MAX_QUALITY};
use lsbmark_core::{
    encode_text_payload, psnr, rgb_to_ycbcr, Attack, AttackError, BitDepth, CarrierState, Channel,
    FlipAxis,
};

/// Smooth synthetic photo: gradients with a soft blob, friendly to JPEG.
fn smooth_carrier(w: u32, h: u32) -> CarrierState {
    let img = RgbImage::from_fn(w, h, |x, y| {
        let dx = x as f64 - w as f64 / 2.0;
        let dy = y as f64 - h as f64 / 2.0;
        let blob = (-(dx * dx + dy * dy) / (w as f64 * 4.0)).exp();
        Rgb([
            (x * 255 / w.max(1)) as u8,
            (y * 255 / h.max(1)) as u8,
            (60.0 + 150.0 * blob) as u8,
        ])
    });
    CarrierState::new(img).unwrap()
}

#[test]
fn attacks_do_not_compose() {
    let attacks = [
        Attack::Recompress { quality: 40 },
        Attack::Rotate { degrees: 15.0 },
        Attack::Flip(FlipAxis::Vertical),
        Attack::Resize { percent: 50 },
    ];
    for first in attacks {
        for second in attacks {
            let mut chained = smooth_carrier(48, 40);
            chained.apply_attack(first).unwrap();
            chained.apply_attack(second).unwrap();

            let mut single = smooth_carrier(48, 40);
            single.apply_attack(second).unwrap();

            assert_eq!(chained.working(), single.working(), "{first:?} then {second:?}");
        }
    }
}

#[test]
fn attack_discards_embedded_watermark() {
    let mut state = smooth_carrier(32, 32);
    encode_text_payload(&mut state, Channel::Red, "gone", BitDepth::LSB).unwrap();
    attack::apply(&mut state, Attack::Flip(FlipAxis::Horizontal)).unwrap();

    let expected = imageops::flip_horizontal(state.original());
    assert_eq!(state.working(), &expected);
}

#[test]
fn zero_rotation_is_identity() {
    let mut state = smooth_carrier(37, 21);
    attack::rotate(&mut state, 0.0).unwrap();
    assert_eq!(state.working(), state.original());
}

#[test]
fn rotation_keeps_size_and_centre() {
    let mut state = smooth_carrier(64, 48);
    attack::rotate(&mut state, 30.0).unwrap();
    assert_eq!(state.dimensions(), (64, 48));

    let (orig, work) = (state.original(), state.working());
    for y in 16..32 {
        for x in 24..40 {
            for c in 0..3 {
                let d = (orig.get_pixel(x, y)[c] as i32 - work.get_pixel(x, y)[c] as i32).abs();
                assert!(d <= 6, "({x},{y}) channel {c} off by {d}");
            }
        }
    }
}

#[test]
fn rotation_corners_go_dark() {
    let mut state = CarrierState::new(RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]))).unwrap();
    attack::rotate(&mut state, 45.0).unwrap();
    // The corner lies outside the rotated-back content and picks up fill.
    assert!(state.working().get_pixel(0, 0)[0] < 255);
    assert_eq!(state.working().get_pixel(20, 20), &Rgb([255, 255, 255]));
}

#[test]
fn resize_keeps_new_dimensions() {
    let mut state = smooth_carrier(64, 64);
    attack::resize(&mut state, 50).unwrap();
    assert_eq!(state.dimensions(), (32, 32));
    assert_eq!(state.derived().dimensions(), (32, 32));
    assert!(state.psnr_against_original().is_err());

    // A second resize starts again from the full-size carrier.
    attack::resize(&mut state, 25).unwrap();
    assert_eq!(state.dimensions(), (16, 16));
}

#[test]
fn flip_axes() {
    let mut state = smooth_carrier(10, 6);
    attack::flip(&mut state, FlipAxis::Vertical);
    assert_eq!(state.working(), &imageops::flip_vertical(state.original()));
    attack::flip(&mut state, FlipAxis::Horizontal);
    assert_eq!(state.working(), &imageops::flip_horizontal(state.original()));
}

#[test]
fn recompression_degrades_with_quality() {
    let mut high = smooth_carrier(64, 64);
    attack::recompress(&mut high, MAX_QUALITY).unwrap();
    let mut low = smooth_carrier(64, 64);
    attack::recompress(&mut low, 5).unwrap();

    let high_psnr = high.psnr_against_original().unwrap();
    let low_psnr = low.psnr_against_original().unwrap();
    assert!(high_psnr > 35.0, "q100 psnr {high_psnr}");
    assert!(low_psnr < high_psnr, "q5 {low_psnr} vs q100 {high_psnr}");
    assert_eq!(low.dimensions(), (64, 64));
}

#[test]
fn recompression_accepts_quality_zero() {
    let mut state = smooth_carrier(16, 16);
    attack::recompress(&mut state, 0).unwrap();
    assert_eq!(state.dimensions(), (16, 16));
}

#[test]
fn derived_refreshed_after_every_attack() {
    for a in [
        Attack::Recompress { quality: 70 },
        Attack::Rotate { degrees: 5.0 },
        Attack::Resize { percent: 75 },
        Attack::Flip(FlipAxis::Horizontal),
    ] {
        let mut state = smooth_carrier(24, 24);
        state.apply_attack(a).unwrap();
        assert_eq!(state.derived(), &rgb_to_ycbcr(state.working()), "{a:?}");
    }
}

#[test]
fn out_of_range_parameters_leave_state_untouched() {
    let mut state = smooth_carrier(16, 16);
    encode_text_payload(&mut state, Channel::Blue, "kept", BitDepth::LSB).unwrap();
    let before = state.working().clone();

    for a in [
        Attack::Recompress { quality: 101 },
        Attack::Rotate { degrees: 90.5 },
        Attack::Rotate { degrees: -1.0 },
        Attack::Rotate { degrees: f64::NAN },
        Attack::Resize { percent: 101 },
    ] {
        let err = state.apply_attack(a).unwrap_err();
        assert!(matches!(err, AttackError::ParameterOutOfRange { .. }), "{a:?}");
        assert_eq!(state.working(), &before);
    }
}

#[test]
fn psnr_defined_after_quarter_turn() {
    let mut state = smooth_carrier(40, 40);
    attack::rotate(&mut state, 90.0).unwrap();
    let score = psnr(state.original(), state.working()).unwrap();
    assert!(score.is_finite());
}
