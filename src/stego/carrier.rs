// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Per-request carrier state.
//!
//! A [`CarrierState`] owns three grids derived from one source image:
//!
//! - `original`: the pristine carrier, never modified after construction.
//! - `working`: the RGB result of the last embed or attack.
//! - `derived`: `working` in YCbCr.
//!
//! `working` is private and only changes through [`CarrierState::set_working`]
//! or [`CarrierState::replace_channel`], both of which recompute `derived`, so
//! `derived` is always exactly `color::rgb_to_ycbcr(working)`.

use image::{DynamicImage, GrayImage, RgbImage};

use crate::color;
use crate::quality;
use crate::stego::bitplane;
use crate::stego::channel::Channel;
use crate::stego::error::StegoError;

/// Carrier image plus its mutable working copy and YCbCr view.
#[derive(Debug, Clone)]
pub struct CarrierState {
    original: RgbImage,
    working: RgbImage,
    derived: RgbImage,
}

impl CarrierState {
    /// Take ownership of a decoded RGB carrier.
    ///
    /// # Errors
    /// [`StegoError::EmptyCarrier`] if the image has zero width or height.
    pub fn new(original: RgbImage) -> Result<Self, StegoError> {
        let (w, h) = original.dimensions();
        if w == 0 || h == 0 {
            return Err(StegoError::EmptyCarrier);
        }
        let working = original.clone();
        let derived = color::rgb_to_ycbcr(&working);
        Ok(Self {
            original,
            working,
            derived,
        })
    }

    /// Build from any decoded image, converting to 8-bit RGB.
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self, StegoError> {
        Self::new(img.to_rgb8())
    }

    /// The pristine carrier.
    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    /// The result of the last embed or attack.
    pub fn working(&self) -> &RgbImage {
        &self.working
    }

    /// `working` in YCbCr (Y, Cb, Cr in slots 0, 1, 2).
    pub fn derived(&self) -> &RgbImage {
        &self.derived
    }

    /// Consume the state, keeping only the working image.
    pub fn into_working(self) -> RgbImage {
        self.working
    }

    /// Dimensions of `working`. These differ from `original` after a resize.
    pub fn dimensions(&self) -> (u32, u32) {
        self.working.dimensions()
    }

    /// Discard every change and start again from `original`.
    pub fn reset(&mut self) {
        self.set_working(self.original.clone());
    }

    /// Copy one component of `working` out as a plane.
    pub fn channel_plane(&self, channel: Channel) -> GrayImage {
        bitplane::channel_plane(&self.working, channel)
    }

    /// PSNR of `working` against `original`.
    ///
    /// # Errors
    /// [`StegoError::ShapeMismatch`] after a resize attack.
    pub fn psnr_against_original(&self) -> Result<f64, StegoError> {
        quality::psnr(&self.original, &self.working)
    }

    /// Replace `working` wholesale and refresh `derived`.
    pub(crate) fn set_working(&mut self, working: RgbImage) {
        self.derived = color::rgb_to_ycbcr(&working);
        self.working = working;
    }

    /// Overwrite one component of `working` and refresh `derived`.
    pub(crate) fn replace_channel(&mut self, channel: Channel, plane: &GrayImage) -> Result<(), StegoError> {
        bitplane::write_channel_plane(&mut self.working, channel, plane)?;
        self.derived = color::rgb_to_ycbcr(&self.working);
        Ok(())
    }
}
