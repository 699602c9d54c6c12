// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! # lsbmark-core
//!
//! Bit-plane watermarking for RGB images. A payload (a binary image pattern
//! or a UTF-8 text) is written into one bit of every sample of one colour
//! channel, then read back from the same channel and depth.
//!
//! Around the codec sit the tools to judge it:
//!
//! - `color`: RGB ↔ YCbCr conversion, kept in sync with every change.
//! - `quality`: PSNR between the carrier and the watermarked result.
//! - `attack`: JPEG recompression, rotate-and-restore, resize and flip,
//!   always applied to the pristine carrier.
//!
//! The core works on decoded pixel grids only; the `io` module holds the
//! file helpers used by the `lsbmark` command-line tool.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lsbmark_core::{BitDepth, CarrierState, Channel};
//!
//! let carrier = lsbmark_core::io::load_rgb("photo.png").unwrap();
//! let mut state = CarrierState::new(carrier).unwrap();
//! lsbmark_core::encode_text_payload(&mut state, Channel::Red, "secret", BitDepth::LSB).unwrap();
//! let text = lsbmark_core::decode_text_payload(&state, Channel::Red, BitDepth::LSB).unwrap();
//! assert_eq!(text, "secret");
//! println!("PSNR: {:.2} dB", state.psnr_against_original().unwrap());
//! ```

pub mod attack;
pub mod color;
pub mod io;
pub mod quality;
pub mod stego;

pub use attack::{Attack, AttackError, FlipAxis};
pub use color::{rgb_to_ycbcr, ycbcr_to_rgb};
pub use quality::{psnr, PSNR_IDENTICAL};
pub use stego::{
    decode_image_pattern, decode_text_payload, embed_bits, embed_mask, encode_image_payload,
    encode_payload, encode_text_payload, extract_bits, scan_text,
};
pub use stego::{BitDepth, BitMask, CarrierState, Channel, Payload, StegoError, TextHit, SENTINEL};
pub use stego::{capacity_bits, text_capacity_bytes};
