use opencv::{
    core::{Mat, Vec4i, Vector},
    imgproc::{canny_def, hough_lines_p},
    prelude::*,
};

use crate::{config::ShelfParams, preprocess::to_gray};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    /// Absolute direction in degrees, 0 for horizontal and 180 for right-to-left horizontal
    pub fn angle(&self) -> f64 {
        ((self.y2 - self.y1) as f64).atan2((self.x2 - self.x1) as f64).to_degrees().abs()
    }
}

impl From<Vec4i> for LineSegment {
    fn from(v: Vec4i) -> Self {
        Self { x1: v[0], y1: v[1], x2: v[2], y2: v[3] }
    }
}

/// Finds near-horizontal segments in a region, the rails of shelf tiers.
#[derive(Debug, Clone)]
pub struct HorizontalLineDetector {
    canny_low: f64,
    canny_high: f64,
    threshold: i32,
    max_line_gap: f64,
    min_length_divisor: i32,
    tolerance: f64,
}

impl HorizontalLineDetector {
    pub fn new(params: &ShelfParams) -> Self {
        Self {
            canny_low: params.canny_low,
            canny_high: params.canny_high,
            threshold: params.hough_threshold,
            max_line_gap: params.hough_max_line_gap,
            min_length_divisor: params.hough_min_length_divisor,
            tolerance: params.horizontal_tolerance,
        }
    }

    pub fn detect(&self, roi: &Mat) -> anyhow::Result<Vec<LineSegment>> {
        let gray = to_gray(roi)?;
        let mut edges = Mat::default();
        canny_def(&gray, &mut edges, self.canny_low, self.canny_high)?;

        let min_length = roi.cols() / self.min_length_divisor;
        let mut lines: Vector<Vec4i> = Vector::new();
        hough_lines_p(
            &edges,
            &mut lines,
            1.0,
            std::f64::consts::PI / 180.0,
            self.threshold,
            min_length as f64,
            self.max_line_gap,
        )?;

        Ok(lines
            .iter()
            .map(LineSegment::from)
            .filter(|l| l.angle() < self.tolerance)
            .collect())
    }
}
