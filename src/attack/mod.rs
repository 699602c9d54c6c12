// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Image-space attacks for robustness testing.
//!
//! Each attack reads the pristine `original` of a [`CarrierState`], never a
//! previously attacked `working`, and replaces `working` (and with it the
//! YCbCr view) with the result. Attacks therefore do not compose: applying
//! two in a row leaves only the effect of the second.
//!
//! - [`recompress`]: JPEG round trip at a chosen quality, 4:4:4 sampling.
//! - [`rotate`]: rotate with canvas expansion, rotate back, crop to size.
//! - [`resize`]: scale by a percentage; the new size is kept.
//! - [`flip`]: mirror left-right or top-bottom.

pub mod flip;
pub mod recompress;
pub mod resize;
pub mod rotate;

use core::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::stego::carrier::CarrierState;

pub use flip::flip;
pub use recompress::recompress;
pub use resize::resize;
pub use rotate::rotate;

/// Largest accepted rotation angle in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 90.0;

/// Largest accepted JPEG quality.
pub const MAX_QUALITY: u8 = 100;

/// Largest accepted resize percentage.
pub const MAX_RESIZE_PERCENT: u32 = 100;

/// Errors that can occur while attacking a carrier.
#[derive(Debug, Error)]
pub enum AttackError {
    /// A numeric parameter outside its accepted range.
    #[error("{name} = {value} is out of range (0..={max})")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        max: f64,
    },
    /// The JPEG encoder or decoder failed during recompression.
    #[error("JPEG round trip failed: {0}")]
    Codec(#[from] image::ImageError),
}

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Left-right.
    Horizontal,
    /// Top-bottom.
    Vertical,
}

impl FromStr for FlipAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(FlipAxis::Horizontal),
            "vertical" | "v" => Ok(FlipAxis::Vertical),
            _ => Err(format!("unknown flip axis '{s}' (expected horizontal or vertical)")),
        }
    }
}

impl fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipAxis::Horizontal => write!(f, "horizontal"),
            FlipAxis::Vertical => write!(f, "vertical"),
        }
    }
}

/// One attack with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attack {
    Recompress { quality: u8 },
    Rotate { degrees: f64 },
    Resize { percent: u32 },
    Flip(FlipAxis),
}

/// Run `attack` against the pristine carrier held by `state`.
pub fn apply(state: &mut CarrierState, attack: Attack) -> Result<(), AttackError> {
    match attack {
        Attack::Recompress { quality } => recompress(state, quality),
        Attack::Rotate { degrees } => rotate(state, degrees),
        Attack::Resize { percent } => resize(state, percent),
        Attack::Flip(axis) => {
            flip(state, axis);
            Ok(())
        }
    }
}

impl CarrierState {
    /// Shorthand for [`apply`].
    pub fn apply_attack(&mut self, attack: Attack) -> Result<(), AttackError> {
        apply(self, attack)
    }
}

fn check_range(name: &'static str, value: f64, max: f64) -> Result<(), AttackError> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err(AttackError::ParameterOutOfRange { name, value, max });
    }
    Ok(())
}
