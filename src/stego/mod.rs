// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Bit-plane watermark encoding and decoding.
//!
//! A payload is written into one bit plane of one RGB channel of the
//! carrier. Two payload kinds are supported:
//!
//! - **Pattern** (`encode_image_payload` / `decode_image_pattern`): a binary
//!   image tiled over the whole plane. Any pattern size is accepted.
//! - **Text** (`encode_text_payload` / `decode_text_payload`): UTF-8 text
//!   terminated by the `$t3g0` sentinel and zero-padded to the plane's
//!   capacity.
//!
//! All operations go through a [`CarrierState`], which keeps the pristine
//! carrier, the working copy and its YCbCr view in sync. The `scan_text`
//! helper tries every channel and depth when the location is unknown.

pub mod error;
pub mod channel;
pub mod bitplane;
pub mod payload;
pub mod capacity;
pub mod carrier;
mod pipeline;
pub mod scan;

pub use error::StegoError;
pub use channel::{BitDepth, Channel};
pub use bitplane::{embed_bits, extract_bits, BitMask};
pub use payload::{Payload, SENTINEL};
pub use carrier::CarrierState;
pub use pipeline::{
    decode_image_pattern, decode_text_payload, embed_mask, encode_image_payload, encode_payload,
    encode_text_payload,
};
pub use capacity::{capacity_bits, text_capacity_bytes};
pub use scan::{scan_text, TextHit};
