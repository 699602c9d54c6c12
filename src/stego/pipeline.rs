// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Encode/decode pipeline over a [`CarrierState`].
//!
//! Every operation works on one RGB channel at one bit depth:
//! 1. copy the channel plane out of `working`
//! 2. build a full-size bit mask from the payload (tiled pattern or framed text)
//! 3. embed or extract that single bit plane
//! 4. write the plane back, which refreshes the YCbCr view

use crate::stego::bitplane::{self, BitMask};
use crate::stego::capacity;
use crate::stego::carrier::CarrierState;
use crate::stego::channel::{BitDepth, Channel};
use crate::stego::error::StegoError;
use crate::stego::payload::{self, Payload};

/// Embed a full-size bit mask into one channel of `working`.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if `mask` is not exactly the carrier's size.
pub fn embed_mask(
    state: &mut CarrierState,
    channel: Channel,
    mask: &BitMask,
    depth: BitDepth,
) -> Result<(), StegoError> {
    let plane = state.channel_plane(channel);
    let stego = bitplane::embed_bits(&plane, mask, depth)?;
    state.replace_channel(channel, &stego)
}

/// Tile a binary pattern over one channel and embed it.
///
/// Patterns of any size are accepted: smaller ones repeat, larger ones are
/// cropped.
///
/// # Errors
/// [`StegoError::EmptyPayload`] if the pattern has zero width or height.
pub fn encode_image_payload(
    state: &mut CarrierState,
    channel: Channel,
    pattern: &BitMask,
    depth: BitDepth,
) -> Result<(), StegoError> {
    let (w, h) = state.dimensions();
    let tiled = payload::tile_pattern(pattern, w, h)?;
    tracing::debug!(
        %channel,
        %depth,
        pattern_w = pattern.width(),
        pattern_h = pattern.height(),
        carrier_w = w,
        carrier_h = h,
        "embedding image pattern"
    );
    embed_mask(state, channel, &tiled, depth)
}

/// Read one bit plane back as a carrier-sized binary image.
pub fn decode_image_pattern(state: &CarrierState, channel: Channel, depth: BitDepth) -> BitMask {
    bitplane::extract_bits(&state.channel_plane(channel), depth)
}

/// Embed `text` followed by the sentinel into one channel.
///
/// # Errors
/// [`StegoError::Capacity`] if the framed text is longer than `width * height`
/// bits. The carrier is left untouched in that case.
pub fn encode_text_payload(
    state: &mut CarrierState,
    channel: Channel,
    text: &str,
    depth: BitDepth,
) -> Result<(), StegoError> {
    let (w, h) = state.dimensions();
    let bits = payload::text_to_bits(text, capacity::capacity_bits(w, h))?;
    tracing::debug!(%channel, %depth, text_bytes = text.len(), "embedding text payload");
    let mask = BitMask::from_flat(w, h, bits);
    embed_mask(state, channel, &mask, depth)
}

/// Extract a sentinel-terminated text from one channel.
///
/// # Errors
/// - [`StegoError::SentinelNotFound`] if no text watermark is present.
/// - [`StegoError::Decode`] if the recovered bytes are not valid UTF-8.
pub fn decode_text_payload(state: &CarrierState, channel: Channel, depth: BitDepth) -> Result<String, StegoError> {
    let mask = decode_image_pattern(state, channel, depth);
    let text = payload::bits_to_text(mask.as_slice())?;
    tracing::debug!(%channel, %depth, text_bytes = text.len(), "decoded text payload");
    Ok(text)
}

/// Embed either payload kind.
pub fn encode_payload(
    state: &mut CarrierState,
    channel: Channel,
    payload: &Payload,
    depth: BitDepth,
) -> Result<(), StegoError> {
    match payload {
        Payload::Pattern(pattern) => encode_image_payload(state, channel, pattern, depth),
        Payload::Text(text) => encode_text_payload(state, channel, text, depth),
    }
}
