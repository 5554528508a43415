//! Geometric primitives shared by the processing stages.
//!
//! Provides an integer axis-aligned rectangle and first-order polygon moments.
//! The moments follow the same closed-contour traversal as the shoelace area
//! formula, so region area and centroid come from a single accumulation pass
//! over the contour points.

use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// X-coordinate of the left edge.
    pub x: u32,
    /// Y-coordinate of the top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Computes the tight bounding box of a set of contour points.
    ///
    /// Width and height count pixels, so a contour covering columns
    /// `min_x..=max_x` yields `width == max_x - min_x + 1`. Returns `None`
    /// for an empty point set.
    pub fn from_points(points: &[Point<u32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        ))
    }

    /// X-coordinate one past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y-coordinate one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Expands the rectangle by `padding` on every side, clamped to an image
    /// of the given dimensions.
    ///
    /// The result always lies fully within `[0, image_width) x [0, image_height)`
    /// as long as the original rectangle does.
    pub fn expand_clamped(&self, padding: u32, image_width: u32, image_height: u32) -> Self {
        let x1 = self.x.saturating_sub(padding);
        let y1 = self.y.saturating_sub(padding);
        let x2 = (self.right() + padding).min(image_width);
        let y2 = (self.bottom() + padding).min(image_height);
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }
}

/// First-order spatial moments of a closed polygon.
#[derive(Debug, Clone, Copy)]
pub struct Moments {
    /// Zeroth moment (signed polygon area).
    pub m00: f64,
    /// First moment about the Y axis.
    pub m10: f64,
    /// First moment about the X axis.
    pub m01: f64,
}

impl Moments {
    /// Absolute enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.m00.abs()
    }

    /// Area-normalized centroid.
    ///
    /// A contour that encloses no area has `m00 == 0`; such a degenerate
    /// region gets the centroid (0, 0) instead of a division by zero.
    pub fn centroid(&self) -> (f32, f32) {
        if self.m00 == 0.0 {
            (0.0, 0.0)
        } else {
            (
                (self.m10 / self.m00) as f32,
                (self.m01 / self.m00) as f32,
            )
        }
    }
}

/// Computes the first-order moments of a closed contour via Green's theorem.
///
/// The contour is treated as a closed polygon through the given points. Signs
/// cancel in the centroid ratio, so point orientation does not matter to
/// callers.
pub fn polygon_moments(points: &[Point<u32>]) -> Moments {
    let n = points.len();
    let mut m00 = 0.0f64;
    let mut m10 = 0.0f64;
    let mut m01 = 0.0f64;

    for i in 0..n {
        let j = (i + 1) % n;
        let (xi, yi) = (points[i].x as f64, points[i].y as f64);
        let (xj, yj) = (points[j].x as f64, points[j].y as f64);
        let cross = xi * yj - xj * yi;
        m00 += cross;
        m10 += (xi + xj) * cross;
        m01 += (yi + yj) * cross;
    }

    Moments {
        m00: m00 / 2.0,
        m10: m10 / 6.0,
        m01: m01 / 6.0,
    }
}
