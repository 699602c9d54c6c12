// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Channel and bit-depth selectors.

use core::fmt;
use std::str::FromStr;

use crate::stego::error::StegoError;

/// One of the three RGB components of the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index into the last axis of an RGB pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            other => Err(StegoError::InvalidChannel(other)),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            _ => Err(format!("unknown channel '{s}' (expected red, green or blue)")),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Position of the bit that is read or written in every sample byte.
///
/// Numbering is big-endian: depth 0 is the most significant bit and depth 7
/// is the true least significant bit. Watermarks written by earlier versions
/// use this numbering, so it must not be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitDepth(u8);

impl BitDepth {
    /// The most significant bit.
    pub const MSB: BitDepth = BitDepth(0);
    /// The least significant bit.
    pub const LSB: BitDepth = BitDepth(7);

    /// Create a bit depth, rejecting values above 7.
    pub fn new(depth: u8) -> Result<Self, StegoError> {
        if depth > 7 {
            return Err(StegoError::InvalidBitDepth(depth));
        }
        Ok(Self(depth))
    }

    /// The raw depth value (0..=7).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Single-bit mask selecting this depth within a byte.
    #[inline]
    pub fn mask(self) -> u8 {
        0x80 >> self.0
    }

    /// All depths, least significant first.
    pub fn all_lsb_first() -> impl Iterator<Item = BitDepth> {
        (0..8u8).rev().map(BitDepth)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        BitDepth::new(value)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
