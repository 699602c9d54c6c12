// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Exhaustive text search over every channel and bit depth.
//!
//! The decode primitives never guess where a watermark lives. [`scan_text`]
//! is the caller-side convenience for when the channel and depth are unknown:
//! it tries all 24 combinations and reports the first hit in a fixed order
//! (red, green, blue; depth 7 down to 0).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::stego::carrier::CarrierState;
use crate::stego::channel::{BitDepth, Channel};
use crate::stego::error::StegoError;
use crate::stego::pipeline::decode_text_payload;

/// A text watermark located by [`scan_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHit {
    pub channel: Channel,
    pub depth: BitDepth,
    pub text: String,
}

/// Every (channel, depth) pair in scan order.
pub fn scan_order() -> Vec<(Channel, BitDepth)> {
    Channel::ALL
        .iter()
        .flat_map(|&ch| BitDepth::all_lsb_first().map(move |d| (ch, d)))
        .collect()
}

/// Find the first decodable text watermark.
///
/// With the `parallel` feature the candidates are decoded concurrently; the
/// reported hit is still the first one in [`scan_order`].
///
/// # Errors
/// - [`StegoError::Decode`] if no candidate decoded but at least one had a
///   sentinel with invalid UTF-8 before it (the first such error is returned).
/// - [`StegoError::SentinelNotFound`] otherwise.
pub fn scan_text(state: &CarrierState) -> Result<TextHit, StegoError> {
    let order = scan_order();
    let attempt = |&(channel, depth): &(Channel, BitDepth)| {
        decode_text_payload(state, channel, depth).map(|text| TextHit { channel, depth, text })
    };

    #[cfg(feature = "parallel")]
    let results: Vec<Result<TextHit, StegoError>> = order.par_iter().map(attempt).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<TextHit, StegoError>> = order.iter().map(attempt).collect();

    let mut first_decode_error = None;
    for result in results {
        match result {
            Ok(hit) => {
                tracing::debug!(channel = %hit.channel, depth = %hit.depth, "scan found text watermark");
                return Ok(hit);
            }
            Err(e @ StegoError::Decode(_)) => {
                if first_decode_error.is_none() {
                    first_decode_error = Some(e);
                }
            }
            Err(_) => {}
        }
    }

    Err(first_decode_error.unwrap_or(StegoError::SentinelNotFound))
}
