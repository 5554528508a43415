//! Image processing stages for badge extraction.
//!
//! This module holds the decision-making parts of the pipeline: converting a
//! scan into a binary foreground mask, extracting connected regions from the
//! mask, and ordering the surviving regions for reading.
//!
//! # Modules
//!
//! * `geometry` - Rectangles and polygon moments shared by the stages
//! * `segmentation` - Brightness thresholding into a foreground mask
//! * `regions` - External contour extraction and noise filtering
//! * `sorting` - Reading-order sorting (rows top-to-bottom, left-to-right within a row)

pub mod geometry;
pub mod regions;
pub mod segmentation;
pub mod sorting;

pub use geometry::{polygon_moments, Moments, Rect};
pub use regions::{extract_regions, Region};
pub use segmentation::{foreground_mask, threshold_mask};
pub use sorting::sort_reading_order;
