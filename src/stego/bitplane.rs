// Copyright (c) 2026 The lsbmark-core authors
// SPDX-License-Identifier: GPL-3.0-only
// lsbmark-core: bit-plane watermarking for RGB images

//! Bit-plane primitives on a single channel plane.
//!
//! A channel plane is one RGB component viewed as a [`GrayImage`]. A bit plane
//! is the set of bits at one [`BitDepth`] across every byte of that plane,
//! held as a [`BitMask`]. [`embed_bits`] and [`extract_bits`] are the only
//! operations that touch sample bits; every higher-level encode or decode
//! reduces to one call of each.

use image::{GrayImage, Luma, RgbImage};

use crate::stego::channel::{BitDepth, Channel};
use crate::stego::error::StegoError;

/// A binary H×W grid, row-major, one `u8` (0 or 1) per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMask {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BitMask {
    /// All-zero mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![0; width as usize * height as usize],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(f(x, y) as u8);
            }
        }
        Self { width, height, bits }
    }

    /// Threshold a grayscale image: any non-zero sample becomes 1.
    pub fn from_luma(img: &GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            bits: img.as_raw().iter().map(|&v| (v != 0) as u8).collect(),
        }
    }

    /// Wrap a flat row-major bit vector. Callers guarantee `bits.len() == width * height`.
    pub(crate) fn from_flat(width: u32, height: u32, bits: Vec<u8>) -> Self {
        debug_assert_eq!(bits.len(), width as usize * height as usize);
        Self { width, height, bits }
    }

    /// Render as a black/white image (1 → 255, 0 → 0).
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.get(x, y) { 255 } else { 0 }])
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, in the same order as [`image::GenericImageView::dimensions`].
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Read the bit at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the mask.
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.offset(x, y)] != 0
    }

    /// Write the bit at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the mask.
    pub fn set(&mut self, x: u32, y: u32, bit: bool) {
        let idx = self.offset(x, y);
        self.bits[idx] = bit as u8;
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b != 0).count()
    }

    /// Row-major bits, one 0/1 byte each.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside {}x{} mask", self.width, self.height);
        y as usize * self.width as usize + x as usize
    }
}

/// Copy one component of an RGB image out as a plane.
pub fn channel_plane(img: &RgbImage, channel: Channel) -> GrayImage {
    let c = channel.index();
    let (w, h) = img.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([img.get_pixel(x, y)[c]]))
}

/// Overwrite one component of an RGB image with `plane`.
pub fn write_channel_plane(img: &mut RgbImage, channel: Channel, plane: &GrayImage) -> Result<(), StegoError> {
    if img.dimensions() != plane.dimensions() {
        return Err(StegoError::ShapeMismatch {
            expected: img.dimensions(),
            actual: plane.dimensions(),
        });
    }
    let c = channel.index();
    for (px, sample) in img.pixels_mut().zip(plane.pixels()) {
        px[c] = sample[0];
    }
    Ok(())
}

/// Replace the bit at `depth` in every byte of `plane` with the matching bit
/// of `mask`. The other seven bits of each byte are preserved.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if `mask` and `plane` differ in dimensions.
pub fn embed_bits(plane: &GrayImage, mask: &BitMask, depth: BitDepth) -> Result<GrayImage, StegoError> {
    if plane.dimensions() != mask.dimensions() {
        return Err(StegoError::ShapeMismatch {
            expected: plane.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let m = depth.mask();
    let mut out = plane.clone();
    for (sample, &bit) in out.iter_mut().zip(mask.as_slice()) {
        if bit != 0 {
            *sample |= m;
        } else {
            *sample &= !m;
        }
    }

    tracing::trace!(depth = depth.get(), ones = mask.count_ones(), "embedded bit plane");
    Ok(out)
}

/// Read the bit at `depth` of every byte of `plane`.
pub fn extract_bits(plane: &GrayImage, depth: BitDepth) -> BitMask {
    let m = depth.mask();
    let (w, h) = plane.dimensions();
    let bits = plane.as_raw().iter().map(|&b| (b & m != 0) as u8).collect();
    BitMask::from_flat(w, h, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| Luma([((x * 37 + y * 11) % 256) as u8]))
    }

    #[test]
    fn embed_then_extract_recovers_mask() {
        let plane = ramp(13, 7);
        let mask = BitMask::from_fn(13, 7, |x, y| (x + y) % 3 == 0);
        for depth in BitDepth::all_lsb_first() {
            let stego = embed_bits(&plane, &mask, depth).unwrap();
            assert_eq!(extract_bits(&stego, depth), mask, "depth {depth}");
        }
    }

    #[test]
    fn embed_preserves_other_bits() {
        let plane = ramp(16, 16);
        let mask = BitMask::from_fn(16, 16, |x, _| x % 2 == 1);
        let depth = BitDepth::new(2).unwrap();
        let stego = embed_bits(&plane, &mask, depth).unwrap();
        let keep = !depth.mask();
        for (a, b) in plane.as_raw().iter().zip(stego.as_raw()) {
            assert_eq!(a & keep, b & keep);
        }
    }

    #[test]
    fn msb_depth_flips_high_bit() {
        let plane = GrayImage::from_pixel(2, 1, Luma([0x01]));
        let mask = BitMask::from_fn(2, 1, |x, _| x == 0);
        let stego = embed_bits(&plane, &mask, BitDepth::MSB).unwrap();
        assert_eq!(stego.as_raw(), &vec![0x81, 0x01]);
    }

    #[test]
    fn shape_mismatch_rejected() {
        let plane = ramp(4, 4);
        let mask = BitMask::new(4, 5);
        let err = embed_bits(&plane, &mask, BitDepth::LSB).unwrap_err();
        assert!(matches!(
            err,
            StegoError::ShapeMismatch { expected: (4, 4), actual: (4, 5) }
        ));
    }

    #[test]
    fn luma_threshold_and_render() {
        let img = GrayImage::from_raw(3, 1, vec![0, 1, 200]).unwrap();
        let mask = BitMask::from_luma(&img);
        assert_eq!(mask.as_slice(), &[0, 1, 1]);
        assert_eq!(mask.to_luma().as_raw(), &vec![0, 255, 255]);
        assert_eq!(mask.count_ones(), 2);
    }

    #[test]
    fn channel_plane_roundtrip() {
        let mut img = RgbImage::from_fn(5, 3, |x, y| image::Rgb([x as u8, y as u8, 9]));
        let green = channel_plane(&img, Channel::Green);
        assert_eq!(green.get_pixel(4, 2)[0], 2);

        let filled = GrayImage::from_pixel(5, 3, Luma([77]));
        write_channel_plane(&mut img, Channel::Blue, &filled).unwrap();
        assert!(img.pixels().all(|p| p[2] == 77));
        assert_eq!(img.get_pixel(3, 1)[0], 3);
    }
}
