//! # badgecut
//!
//! Extracts individual badge sub-images from a single composite scan.
//!
//! The scan is assumed to show dark badges on a near-uniform light background,
//! arranged in roughly horizontal bands. The pipeline separates foreground from
//! background with a fixed brightness threshold, extracts connected foreground
//! regions, discards noise below a minimum area, orders the survivors in
//! reading order (top-to-bottom, then left-to-right within a row), and emits a
//! padded crop for each of them.
//!
//! ## Modules
//!
//! * [`core`] - Error types
//! * [`processors`] - Segmentation, region extraction, and reading-order sorting
//! * [`pipeline`] - Configuration and the [`BadgeCutter`](pipeline::BadgeCutter) orchestrator
//! * [`utils`] - Image loading, cropping, and logging setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use badgecut::prelude::*;
//!
//! # fn main() -> Result<(), BadgeCutError> {
//! let cutter = BadgeCutter::new(BadgeCutConfig::default())?;
//! let crops = cutter.process_file(std::path::Path::new("badges.jpeg"))?;
//! save_crops(&crops, std::path::Path::new("badges"))?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::core::{BadgeCutError, CutResult};

    // Pipeline (high-level API)
    pub use crate::pipeline::{save_crops, BadgeCrop, BadgeCutConfig, BadgeCutter, ConfigLoader};

    // Geometry and region types
    pub use crate::processors::{Rect, Region};

    // Image utilities
    pub use crate::utils::{init_tracing, load_image};
}
