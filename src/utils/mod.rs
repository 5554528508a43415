//! Utility functions for the badge extraction pipeline.
//!
//! Image loading and conversion helpers, the padded bounding-box crop, and
//! logging setup.

pub mod crop;
pub mod image;

// Re-export image helpers
pub use image::{dynamic_to_rgb, load_image, rgb_to_gray};

// Re-export crop helpers
pub use crop::padded_crop;

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with environment filter and formatting
/// layer. Typically called at the start of an application to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
