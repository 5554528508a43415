//! Connected foreground region extraction.
//!
//! Regions are found as contours of the binary mask. Only outermost
//! boundaries become regions: holes inside a badge, and anything nested
//! inside those holes (text strokes, artwork detail), must never surface as
//! separate candidates. Regions at or below the minimum area are discarded
//! as noise: stray text, speckles, and scanning artifacts smaller than a
//! real badge.

use image::GrayImage;
use imageproc::contours::find_contours;

use crate::processors::geometry::{polygon_moments, Rect};

/// A connected foreground region, one candidate badge.
#[derive(Debug, Clone)]
pub struct Region {
    /// Enclosed contour area in pixels squared.
    pub area: f64,
    /// Area-weighted centroid (x, y), used for reading-order sorting.
    pub centroid: (f32, f32),
    /// Tight axis-aligned bounding box of the contour.
    pub bounding_box: Rect,
}

impl Region {
    /// Centroid x-coordinate.
    #[inline]
    pub fn centroid_x(&self) -> f32 {
        self.centroid.0
    }

    /// Centroid y-coordinate.
    #[inline]
    pub fn centroid_y(&self) -> f32 {
        self.centroid.1
    }
}

/// Extracts connected foreground regions from a binary mask.
///
/// Contours with a parent in the hierarchy are nested boundaries and are
/// skipped, so only external (outermost) components are returned. A region
/// survives iff its area is strictly greater than `min_area`. A mask with no
/// foreground pixels yields an empty set, not an error.
pub fn extract_regions(mask: &GrayImage, min_area: f64) -> Vec<Region> {
    let contours = find_contours::<u32>(mask);
    let mut regions = Vec::new();

    for contour in &contours {
        if contour.parent.is_some() {
            continue;
        }
        let Some(bounding_box) = Rect::from_points(&contour.points) else {
            continue;
        };
        let moments = polygon_moments(&contour.points);
        let area = moments.area();
        if area <= min_area {
            continue;
        }
        regions.push(Region {
            area,
            centroid: moments.centroid(),
            bounding_box,
        });
    }

    regions
}
