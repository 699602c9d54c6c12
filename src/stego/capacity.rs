// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Channel capacity.
//!
//! One channel plane carries exactly one bit per pixel at the selected depth,
//! so its capacity is `width * height` bits. Text payloads spend
//! [`SENTINEL_BITS`] of that on the terminator.

use crate::stego::payload::{SENTINEL, SENTINEL_BITS};

/// Total bits one channel plane can carry.
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Largest UTF-8 byte length of a text payload that fits a plane.
///
/// Returns 0 if the plane cannot even hold the sentinel.
pub fn text_capacity_bytes(width: u32, height: u32) -> usize {
    (capacity_bits(width, height) / 8).saturating_sub(SENTINEL.len())
}

/// Whether `text` fits a `width`×`height` plane.
pub fn text_fits(text: &str, width: u32, height: u32) -> bool {
    text.len() * 8 + SENTINEL_BITS <= capacity_bits(width, height)
}
