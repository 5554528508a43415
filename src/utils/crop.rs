//! Padded bounding-box cropping.

use image::RgbImage;

use crate::processors::geometry::Rect;

/// Crops a padded copy of `rect` out of the source image.
///
/// The rectangle is expanded by `padding` on every side and clamped to the
/// image bounds before the pixels are copied out, so the returned sub-image
/// always lies fully within the source. Returns the clamped box in source
/// coordinates together with the sub-image.
pub fn padded_crop(img: &RgbImage, rect: Rect, padding: u32) -> (Rect, RgbImage) {
    let clamped = rect.expand_clamped(padding, img.width(), img.height());

    let mut crop = RgbImage::new(clamped.width, clamped.height);
    for y in 0..clamped.height {
        for x in 0..clamped.width {
            crop.put_pixel(x, y, *img.get_pixel(clamped.x + x, clamped.y + y));
        }
    }

    (clamped, crop)
}
