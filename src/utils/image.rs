//! Image loading and conversion helpers.
//!
//! Thin wrappers over the `image` crate used at the pipeline boundary and by
//! the segmentation stage.

use crate::core::BadgeCutError;
use image::{DynamicImage, GrayImage, RgbImage};

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Converts an RGB image to grayscale.
pub fn rgb_to_gray(img: &RgbImage) -> GrayImage {
    image::imageops::grayscale(img)
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Errors
///
/// Returns [`BadgeCutError::ImageLoad`] if the image cannot be decoded from
/// the given path.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, BadgeCutError> {
    let img = image::open(path).map_err(BadgeCutError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}
