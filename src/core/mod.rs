//! Core error handling for the badge extraction pipeline.

pub mod errors;

pub use errors::{BadgeCutError, CutResult};
