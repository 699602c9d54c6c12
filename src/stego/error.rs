// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Error types for bit-plane embedding and extraction.
//!
//! [`StegoError`] covers every failure mode of the codec, the payload framing
//! and the quality metric. Attack-specific failures live in
//! [`AttackError`](crate::attack::AttackError).

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while embedding, extracting or scoring.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The text plus sentinel does not fit the channel's bit plane.
    ///
    /// Raised before the carrier is touched, so the state is unchanged.
    #[error("payload needs {needed_bits} bits but the channel holds only {capacity_bits}")]
    Capacity {
        needed_bits: usize,
        capacity_bits: usize,
    },
    /// No sentinel was found in the extracted bit plane.
    #[error("no text watermark found (sentinel missing)")]
    SentinelNotFound,
    /// The sentinel was found but the bytes before it are not valid UTF-8.
    #[error("extracted text is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
    /// Two grids that must share dimensions do not.
    #[error("shape mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    /// A channel index outside {0, 1, 2}.
    #[error("invalid channel index {0} (expected 0, 1 or 2)")]
    InvalidChannel(u8),
    /// A bit depth outside 0..=7.
    #[error("invalid bit depth {0} (expected 0..=7)")]
    InvalidBitDepth(u8),
    /// The carrier has zero width or height.
    #[error("carrier image is empty")]
    EmptyCarrier,
    /// An image pattern with zero width or height cannot be tiled.
    #[error("payload pattern is empty")]
    EmptyPayload,
}
