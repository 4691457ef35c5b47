use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

/// Thresholds for every stage of the shelf pipeline.
///
/// Missing keys in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfParams {
    pub frame_width: i32,
    pub frame_height: i32,

    pub blur_kernel: i32,
    pub canny_low: f64,
    pub canny_high: f64,

    pub min_contour_area: f64,
    /// Polygon approximation tolerance as a fraction of the contour perimeter
    pub poly_epsilon_ratio: f64,
    pub min_shelf_width: f32,
    pub min_aspect_ratio: f32,
    pub max_aspect_ratio: f32,
    /// Degrees
    pub max_tilt: f32,

    pub hough_threshold: i32,
    pub hough_max_line_gap: f64,
    /// Minimum segment length is the ROI width divided by this
    pub hough_min_length_divisor: i32,
    /// Degrees
    pub horizontal_tolerance: f64,
    pub min_horizontal_lines: usize,

    pub history_capacity: usize,
    pub cluster_iou: f64,

    pub zone_alpha: f64,
}

impl Default for ShelfParams {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
            blur_kernel: 5,
            canny_low: 50.0,
            canny_high: 150.0,
            min_contour_area: 500.0,
            poly_epsilon_ratio: 0.02,
            min_shelf_width: 150.0,
            min_aspect_ratio: 1.0,
            max_aspect_ratio: 15.0,
            max_tilt: 15.0,
            hough_threshold: 80,
            hough_max_line_gap: 10.0,
            hough_min_length_divisor: 3,
            horizontal_tolerance: 10.0,
            min_horizontal_lines: 1,
            history_capacity: 15,
            cluster_iou: 0.4,
            zone_alpha: 0.3,
        }
    }
}

impl ShelfParams {
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let params: ShelfParams = toml::from_str(src)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&src).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frame_width <= 0 || self.frame_height <= 0 {
            bail!("Frame size must be positive, got {}x{}", self.frame_width, self.frame_height);
        }
        if self.blur_kernel <= 0 || self.blur_kernel % 2 == 0 {
            bail!("Blur kernel must be a positive odd number, got {}", self.blur_kernel);
        }
        if self.canny_low > self.canny_high {
            bail!("Canny low threshold {} is above high threshold {}", self.canny_low, self.canny_high);
        }
        if self.min_aspect_ratio >= self.max_aspect_ratio {
            bail!("Aspect ratio range ({}, {}) is empty", self.min_aspect_ratio, self.max_aspect_ratio);
        }
        if self.hough_min_length_divisor <= 0 {
            bail!("Hough min length divisor must be positive");
        }
        if self.history_capacity == 0 {
            bail!("History capacity must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.cluster_iou) {
            bail!("Cluster IoU threshold must be within [0, 1], got {}", self.cluster_iou);
        }
        if !(0.0..=1.0).contains(&self.zone_alpha) {
            bail!("Zone alpha must be within [0, 1], got {}", self.zone_alpha);
        }

        Ok(())
    }
}
