//! Badge Extraction Demo
//!
//! This demo runs the full badge extraction pipeline on a composite scan and
//! writes each detected badge to a numbered PNG file in reading order.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example extract_badges -- [OPTIONS] <IMAGE>
//! ```
//!
//! # Arguments
//!
//! * `<IMAGE>` - Path to the composite scan image
//! * `-o, --output-dir` - Directory to save the numbered badge crops
//! * `-c, --config` - Optional TOML/JSON configuration file
//!
//! # Example
//!
//! ```bash
//! cargo run --example extract_badges -- -o public/badges public/badges.jpeg
//! ```

use badgecut::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Command-line arguments for the badge extraction demo
#[derive(Parser)]
#[command(name = "extract_badges")]
#[command(about = "Extracts badge crops from a composite scan in reading order")]
struct Args {
    /// Path to the composite scan image
    image: PathBuf,

    /// Directory to save the numbered badge crops
    #[arg(short, long, default_value = "badges")]
    output_dir: PathBuf,

    /// Optional configuration file (TOML or JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grayscale intensity below which a pixel counts as foreground
    #[arg(long)]
    brightness_threshold: Option<u8>,

    /// Minimum contour area for a region to count as a badge
    #[arg(long)]
    min_area: Option<f64>,

    /// Row grouping tolerance in pixels
    #[arg(long)]
    row_tolerance: Option<f32>,

    /// Padding in pixels added around each badge before cropping
    #[arg(long)]
    padding: Option<u32>,

    /// Maximum number of badges to emit
    #[arg(long)]
    max_outputs: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    badgecut::utils::init_tracing();

    // Parse command-line arguments
    let args = Args::parse();

    info!("Badge Extraction Demo");

    // Verify that the input image exists
    if !args.image.exists() {
        error!("Image file not found: {}", args.image.display());
        return Err("Image file not found".into());
    }

    // Start from the config file if given, then apply flag overrides
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => BadgeCutConfig::default(),
    };
    if let Some(threshold) = args.brightness_threshold {
        config.brightness_threshold = threshold;
    }
    if let Some(min_area) = args.min_area {
        config.min_area = min_area;
    }
    if let Some(tolerance) = args.row_tolerance {
        config.row_tolerance_px = tolerance;
    }
    if let Some(padding) = args.padding {
        config.padding_px = padding;
    }
    if let Some(max_outputs) = args.max_outputs {
        config.max_outputs = max_outputs;
    }

    if args.verbose {
        info!("Extraction Configuration:");
        info!("  Brightness threshold: {}", config.brightness_threshold);
        info!("  Minimum area: {}", config.min_area);
        info!("  Row tolerance: {} px", config.row_tolerance_px);
        info!("  Padding: {} px", config.padding_px);
        info!("  Max outputs: {}", config.max_outputs);
    }

    let cutter = BadgeCutter::new(config)?;

    // Run the pipeline
    info!("Processing {}...", args.image.display());
    let start = std::time::Instant::now();
    let crops = cutter.process_file(&args.image)?;
    let duration = start.elapsed();

    info!(
        "Extraction completed in {:.2}ms",
        duration.as_secs_f64() * 1000.0
    );

    if crops.is_empty() {
        warn!("No badges found in {}", args.image.display());
        return Ok(());
    }

    info!("Total badges detected: {}", crops.len());
    for crop in &crops {
        info!(
            "  Badge #{}: {}x{} at ({}, {})",
            crop.index,
            crop.source_box.width,
            crop.source_box.height,
            crop.source_box.x,
            crop.source_box.y
        );
    }

    // Write the numbered crops
    save_crops(&crops, &args.output_dir)?;
    info!(
        "Saved {} badges to {}",
        crops.len(),
        args.output_dir.display()
    );

    Ok(())
}
