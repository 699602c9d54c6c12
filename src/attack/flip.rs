// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Mirror attack.

use image::imageops;

use super::FlipAxis;
use crate::stego::carrier::CarrierState;

/// Mirror `original` along `axis`.
pub fn flip(state: &mut CarrierState, axis: FlipAxis) {
    let flipped = match axis {
        FlipAxis::Horizontal => imageops::flip_horizontal(state.original()),
        FlipAxis::Vertical => imageops::flip_vertical(state.original()),
    };
    tracing::debug!(%axis, "flipped carrier");
    state.set_working(flipped);
}
