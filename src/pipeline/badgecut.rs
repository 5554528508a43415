//! Badge extraction orchestration.
//!
//! [`BadgeCutter`] composes the processing stages into the full pipeline:
//! segmentation, region extraction, reading-order sorting, and padded
//! cropping. The pipeline is a pure, single-threaded transformation of one
//! in-memory image into a bounded list of crops; nothing is cached across
//! runs. [`save_crops`] is the collaborator-side writer that puts each crop
//! on disk as a numbered PNG.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::core::{BadgeCutError, CutResult};
use crate::pipeline::config::BadgeCutConfig;
use crate::processors::geometry::Rect;
use crate::processors::{extract_regions, foreground_mask, sort_reading_order};
use crate::utils::crop::padded_crop;
use crate::utils::image::load_image;

/// One extracted badge: the final output unit of the pipeline.
#[derive(Debug, Clone)]
pub struct BadgeCrop {
    /// 1-based rank in reading order.
    pub index: usize,
    /// The padded, clamped bounding box in source image coordinates.
    pub source_box: Rect,
    /// The cropped sub-image.
    pub image: RgbImage,
}

/// The badge extraction pipeline.
///
/// Holds a validated configuration and applies the four stages in order.
/// Stateless between runs: each call to [`process`](Self::process) operates
/// only on its own input.
#[derive(Debug, Clone)]
pub struct BadgeCutter {
    config: BadgeCutConfig,
}

impl BadgeCutter {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeCutError::ConfigError`] if the configuration fails
    /// validation.
    pub fn new(config: BadgeCutConfig) -> CutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Gets the pipeline configuration.
    pub fn config(&self) -> &BadgeCutConfig {
        &self.config
    }

    /// Runs the pipeline on a decoded scan.
    ///
    /// Returns the crops in reading order with dense 1-based indices. A scan
    /// with no qualifying regions yields an empty list; that is a result,
    /// not an error.
    pub fn process(&self, img: &RgbImage) -> Vec<BadgeCrop> {
        let mask = foreground_mask(img, self.config.brightness_threshold);
        let regions = extract_regions(&mask, self.config.min_area);
        debug!(
            "{} regions above the {} area threshold",
            regions.len(),
            self.config.min_area
        );

        let ordered = sort_reading_order(regions, self.config.row_tolerance_px);
        if ordered.len() > self.config.max_outputs {
            debug!(
                "capping output at {} of {} regions",
                self.config.max_outputs,
                ordered.len()
            );
        }

        ordered
            .iter()
            .take(self.config.max_outputs)
            .enumerate()
            .map(|(i, region)| {
                let (source_box, image) =
                    padded_crop(img, region.bounding_box, self.config.padding_px);
                BadgeCrop {
                    index: i + 1,
                    source_box,
                    image,
                }
            })
            .collect()
    }

    /// Loads a scan from disk and runs the pipeline on it.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeCutError::ImageLoad`] if the image cannot be decoded
    /// and [`BadgeCutError::InvalidInput`] if it decodes to zero pixels.
    pub fn process_file(&self, path: &Path) -> CutResult<Vec<BadgeCrop>> {
        let img = load_image(path)?;
        if img.width() == 0 || img.height() == 0 {
            return Err(BadgeCutError::invalid_input(format!(
                "empty image: {}",
                path.display()
            )));
        }
        debug!(
            "loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(self.process(&img))
    }
}

impl Default for BadgeCutter {
    /// Creates a pipeline with the default configuration.
    fn default() -> Self {
        Self {
            config: BadgeCutConfig::default(),
        }
    }
}

/// Writes each crop to `output_dir` as `badge_<index>.png`.
///
/// The directory is created if it does not exist. File names use the crop's
/// 1-based reading-order index, so a run that found six badges produces
/// `badge_1.png` through `badge_6.png`.
///
/// # Errors
///
/// Returns [`BadgeCutError::Io`] if the directory cannot be created and
/// [`BadgeCutError::ImageSave`] if a crop fails to encode.
pub fn save_crops(crops: &[BadgeCrop], output_dir: &Path) -> CutResult<()> {
    std::fs::create_dir_all(output_dir)?;

    for crop in crops {
        let path = output_dir.join(format!("badge_{}.png", crop.index));
        crop.image
            .save(&path)
            .map_err(|source| BadgeCutError::ImageSave {
                path: path.display().to_string(),
                source,
            })?;
        debug!("saved {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const BACKGROUND: Rgb<u8> = Rgb([250, 250, 250]);
    const INK: Rgb<u8> = Rgb([40, 40, 40]);

    /// Builds a light scan with dark squares at the given (x, y, side) spots.
    fn scan_with_squares(width: u32, height: u32, squares: &[(u32, u32, u32)]) -> RgbImage {
        let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
        for &(x0, y0, side) in squares {
            for y in y0..y0 + side {
                for x in x0..x0 + side {
                    img.put_pixel(x, y, INK);
                }
            }
        }
        img
    }

    fn default_cutter() -> BadgeCutter {
        BadgeCutter::new(BadgeCutConfig::default()).unwrap()
    }

    #[test]
    fn scenario_single_centered_square() {
        let img = scan_with_squares(600, 600, &[(200, 200, 200)]);

        let mask = foreground_mask(&img, 220);
        let regions = extract_regions(&mask, 2000.0);
        assert_eq!(regions.len(), 1);
        assert!((regions[0].area - 40_000.0).abs() < 500.0);

        let crops = default_cutter().process(&img);
        assert_eq!(crops.len(), 1);
        let crop = &crops[0];
        assert_eq!(crop.index, 1);
        // 20 px of padding on each side of the 200x200 square.
        assert_eq!(crop.source_box, Rect::new(180, 180, 240, 240));
        assert_eq!(crop.image.dimensions(), (240, 240));
    }

    #[test]
    fn scenario_grid_reads_row_major() {
        // 2 rows x 3 columns of identical squares.
        let mut spots = Vec::new();
        for &y in &[50u32, 300] {
            for &x in &[50u32, 250, 450] {
                spots.push((x, y, 100u32));
            }
        }
        let img = scan_with_squares(650, 500, &spots);
        let crops = default_cutter().process(&img);

        assert_eq!(crops.len(), 6);
        // Top row first, left to right, then the bottom row.
        let positions: Vec<(u32, u32)> = crops
            .iter()
            .map(|c| (c.source_box.x, c.source_box.y))
            .collect();
        assert_eq!(
            positions,
            vec![
                (30, 30),
                (230, 30),
                (430, 30),
                (30, 280),
                (230, 280),
                (430, 280),
            ]
        );
        let indices: Vec<usize> = crops.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn scenario_all_background_is_empty_result() {
        let img = RgbImage::from_pixel(400, 300, BACKGROUND);
        let crops = default_cutter().process(&img);
        assert!(crops.is_empty());
    }

    #[test]
    fn scenario_output_is_capped() {
        // 3 rows x 5 columns = 15 regions with the default cap of 10.
        let mut spots = Vec::new();
        for row in 0..3u32 {
            for col in 0..5u32 {
                spots.push((20 + col * 100, 20 + row * 150, 60u32));
            }
        }
        let img = scan_with_squares(520, 420, &spots);
        let crops = default_cutter().process(&img);

        assert_eq!(crops.len(), 10);
        let indices: Vec<usize> = crops.iter().map(|c| c.index).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
        // The cap cuts mid-grid: the last emitted crop is row 2, column 5.
        assert_eq!(crops[9].source_box, Rect::new(400, 150, 100, 100));
    }

    #[test]
    fn scenario_area_threshold_is_strict() {
        // 46x46 survives the default 2000 threshold (contour area 2025),
        // 45x45 does not (1936).
        let img = scan_with_squares(400, 200, &[(20, 20, 46), (200, 20, 45)]);
        let crops = default_cutter().process(&img);
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].source_box.x, 0);

        // At exactly the region's area the strict comparison excludes it.
        let config = BadgeCutConfig {
            min_area: 2025.0,
            ..Default::default()
        };
        let crops = BadgeCutter::new(config).unwrap().process(&img);
        assert!(crops.is_empty());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let img = scan_with_squares(650, 500, &[(50, 50, 100), (250, 60, 100), (50, 300, 100)]);
        let cutter = default_cutter();

        let first = cutter.process(&img);
        let second = cutter.process(&img);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.source_box, b.source_box);
        }
    }

    #[test]
    fn test_crops_stay_within_bounds() {
        // A square close to the corner forces the padding to clamp.
        let img = scan_with_squares(300, 300, &[(2, 2, 68), (200, 210, 80)]);
        let crops = default_cutter().process(&img);

        assert_eq!(crops.len(), 2);
        for crop in &crops {
            assert!(crop.source_box.right() <= img.width());
            assert!(crop.source_box.bottom() <= img.height());
        }
        assert_eq!(crops[0].source_box, Rect::new(0, 0, 90, 90));
    }

    #[test]
    fn test_save_crops_writes_numbered_files() {
        let img = scan_with_squares(300, 200, &[(30, 30, 80), (170, 30, 80)]);
        let crops = default_cutter().process(&img);
        assert_eq!(crops.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("badges");
        save_crops(&crops, &output_dir).unwrap();

        assert!(output_dir.join("badge_1.png").is_file());
        assert!(output_dir.join("badge_2.png").is_file());
        assert!(!output_dir.join("badge_3.png").exists());
    }
}
