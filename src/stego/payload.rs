// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Payload kinds and their bit-plane framing.
//!
//! Two payload kinds are supported:
//!
//! - **Pattern**: a binary image. It is tiled (row-major, wrapping both axes)
//!   over the whole channel plane and cropped, so any non-empty pattern fits.
//! - **Text**: UTF-8 bytes terminated by a fixed sentinel, zero-padded to
//!   the plane's bit capacity:
//!
//! ```text
//! [N bytes]  UTF-8 text
//! [5 bytes]  "$t3g0" sentinel
//! [0 bits]*  zero padding up to width * height bits
//! ```
//!
//! Bytes are expanded MSB first.

use crate::stego::bitplane::BitMask;
use crate::stego::error::StegoError;

/// Terminator appended to every text payload.
pub const SENTINEL: &[u8] = b"$t3g0";

/// Sentinel length in bits.
pub const SENTINEL_BITS: usize = SENTINEL.len() * 8;

/// What to hide in a channel plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Binary image pattern, tiled to fill the plane.
    Pattern(BitMask),
    /// UTF-8 text, terminated by [`SENTINEL`].
    Text(String),
}

/// Repeat `pattern` over a `width`×`height` grid, cropping the excess.
///
/// # Errors
/// [`StegoError::EmptyPayload`] if the pattern has zero width or height.
pub fn tile_pattern(pattern: &BitMask, width: u32, height: u32) -> Result<BitMask, StegoError> {
    let (pw, ph) = pattern.dimensions();
    if pw == 0 || ph == 0 {
        return Err(StegoError::EmptyPayload);
    }
    Ok(BitMask::from_fn(width, height, |x, y| pattern.get(x % pw, y % ph)))
}

/// Expand bytes into bits, MSB first, one 0/1 byte per bit.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Pack bits back into bytes, MSB first. A trailing partial byte is
/// zero-filled on the right.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit & 1) << (7 - i)))
        })
        .collect()
}

/// Frame `text` for a plane holding `capacity_bits` bits.
///
/// Returns exactly `capacity_bits` bits: text, sentinel, zero padding.
///
/// # Errors
/// [`StegoError::Capacity`] if text plus sentinel exceeds `capacity_bits`.
pub fn text_to_bits(text: &str, capacity_bits: usize) -> Result<Vec<u8>, StegoError> {
    let needed_bits = (text.len() + SENTINEL.len()) * 8;
    if needed_bits > capacity_bits {
        return Err(StegoError::Capacity {
            needed_bits,
            capacity_bits,
        });
    }

    let mut framed = Vec::with_capacity(text.len() + SENTINEL.len());
    framed.extend_from_slice(text.as_bytes());
    framed.extend_from_slice(SENTINEL);

    let mut bits = bytes_to_bits(&framed);
    bits.resize(capacity_bits, 0);
    Ok(bits)
}

/// Recover text from a flat bit sequence.
///
/// Searches left to right for the first sentinel that starts on a byte
/// boundary and decodes everything before it. The encoder only ever writes
/// whole bytes, so a sentinel bit pattern straddling two text bytes is text,
/// not a terminator.
///
/// # Errors
/// - [`StegoError::SentinelNotFound`] if the sentinel never occurs.
/// - [`StegoError::Decode`] if the bytes before it are not valid UTF-8.
pub fn bits_to_text(bits: &[u8]) -> Result<String, StegoError> {
    let end = find_sentinel(bits).ok_or(StegoError::SentinelNotFound)?;
    let bytes = bits_to_bytes(&bits[..end]);
    Ok(String::from_utf8(bytes)?)
}

/// Bit offset of the first byte-aligned sentinel occurrence.
///
/// Trailing bits that do not fill a byte are ignored.
fn find_sentinel(bits: &[u8]) -> Option<usize> {
    let whole = bits.len() - bits.len() % 8;
    let bytes = bits_to_bytes(&bits[..whole]);
    bytes
        .windows(SENTINEL.len())
        .position(|w| w == SENTINEL)
        .map(|byte| byte * 8)
}
