//! Reading-order sorting for extracted regions.
//!
//! Establishes the order badges are read in: rows from top to bottom, regions
//! from left to right within a row.
//!
//! ## Algorithm
//!
//! A single linear sweep, not a full 2-D clustering:
//!
//! 1. Sort all regions by centroid Y ascending.
//! 2. The first region seeds the first row and fixes the row's reference Y.
//! 3. Each subsequent region joins the open row iff its centroid Y is within
//!    the row tolerance of that reference; otherwise the row is closed and the
//!    region seeds a new one, becoming the new reference.
//! 4. Rows are sorted internally by centroid X and concatenated in the order
//!    they were formed, which is already top-to-bottom.
//!
//! The reference Y is the row's *first* member, not a running average. A
//! region can therefore be split into a new row when it drifts past the seed
//! even if it sits close to later row members. Badges are assumed to sit in
//! visually distinct horizontal bands where this never triggers.

use std::cmp::Ordering;

use crate::processors::regions::Region;

/// Sorts regions into reading order: rows top-to-bottom, left-to-right within
/// each row.
///
/// `row_tolerance` is the maximum centroid-Y distance from a row's first
/// member for a region to join that row. An empty input yields an empty
/// output.
pub fn sort_reading_order(mut regions: Vec<Region>, row_tolerance: f32) -> Vec<Region> {
    if regions.is_empty() {
        return regions;
    }

    regions.sort_by(|a, b| {
        a.centroid_y()
            .partial_cmp(&b.centroid_y())
            .unwrap_or(Ordering::Equal)
    });

    let mut rows: Vec<Vec<Region>> = Vec::new();
    let mut current_row: Vec<Region> = Vec::new();
    let mut reference_y = 0.0f32;

    for region in regions {
        if current_row.is_empty() {
            reference_y = region.centroid_y();
            current_row.push(region);
        } else if (region.centroid_y() - reference_y).abs() < row_tolerance {
            current_row.push(region);
        } else {
            rows.push(std::mem::take(&mut current_row));
            reference_y = region.centroid_y();
            current_row.push(region);
        }
    }
    rows.push(current_row);

    let mut ordered = Vec::with_capacity(rows.iter().map(Vec::len).sum());
    for mut row in rows {
        row.sort_by(|a, b| {
            a.centroid_x()
                .partial_cmp(&b.centroid_x())
                .unwrap_or(Ordering::Equal)
        });
        ordered.extend(row);
    }
    ordered
}
