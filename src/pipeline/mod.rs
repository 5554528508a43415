//! Badge extraction pipeline.
//!
//! This module wires the processing stages together: [`BadgeCutConfig`] holds
//! the fixed thresholds, [`BadgeCutter`] runs segmentation, region
//! extraction, sorting, and cropping on a decoded scan, and [`save_crops`]
//! writes the resulting sub-images as numbered files.

pub mod badgecut;
pub mod config;

pub use badgecut::{save_crops, BadgeCrop, BadgeCutter};
pub use config::{BadgeCutConfig, ConfigFormat, ConfigLoader};
