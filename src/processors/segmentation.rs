//! Foreground/background segmentation.
//!
//! The scan background is a near-uniform light color close to the top of the
//! intensity range, so a hard binary threshold separates it from badge
//! artwork, borders, and shadows. The threshold is fixed, not adaptive.

use image::{GrayImage, Luma, RgbImage};

use crate::utils::image::rgb_to_gray;

/// Mask value for foreground pixels.
pub const FOREGROUND: u8 = 255;
/// Mask value for background pixels.
pub const BACKGROUND: u8 = 0;

/// Binarizes a grayscale image into a foreground mask.
///
/// A pixel is foreground iff its intensity is strictly below `threshold`;
/// a pixel exactly at the threshold counts as background.
pub fn threshold_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    let mut mask = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let value = if pixel[0] < threshold {
            FOREGROUND
        } else {
            BACKGROUND
        };
        mask.put_pixel(x, y, Luma([value]));
    }
    mask
}

/// Converts a color scan to luma and thresholds it in one step.
pub fn foreground_mask(img: &RgbImage, threshold: u8) -> GrayImage {
    threshold_mask(&rgb_to_gray(img), threshold)
}
