use opencv::{
    core::{Mat, Point, Vector},
    imgproc::{approx_poly_dp, arc_length, bounding_rect, min_area_rect},
};

use geometry::CanonicalRect;
use lines::HorizontalLineDetector;

use crate::{config::ShelfParams, utils::crop_roi};

use super::proposals::{bounding_box::BoundingBox, contours::Contour};

pub mod geometry;
pub mod lines;

/// Why a contour was not taken as a shelf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    VertexCount(usize),
    TooNarrow(f32),
    AspectRatio(f32),
    Tilted(f32),
    EmptyRegion,
    NoHorizontalLines,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Shelf(BoundingBox),
    Rejected(Rejection),
}

pub struct ShelfClassifier {
    poly_epsilon_ratio: f64,
    min_width: f32,
    min_aspect_ratio: f32,
    max_aspect_ratio: f32,
    max_tilt: f32,
    min_lines: usize,
    line_detector: HorizontalLineDetector,
}

impl ShelfClassifier {
    pub fn new(params: &ShelfParams) -> Self {
        Self {
            poly_epsilon_ratio: params.poly_epsilon_ratio,
            min_width: params.min_shelf_width,
            min_aspect_ratio: params.min_aspect_ratio,
            max_aspect_ratio: params.max_aspect_ratio,
            max_tilt: params.max_tilt,
            min_lines: params.min_horizontal_lines,
            line_detector: HorizontalLineDetector::new(params),
        }
    }

    /// Runs the gates in order and stops at the first one that fails.
    pub fn classify(&self, contour: &Contour, frame: &Mat) -> anyhow::Result<Verdict> {
        let mut approx: Vector<Point> = Vector::new();
        let epsilon = self.poly_epsilon_ratio * arc_length(contour, true)?;
        approx_poly_dp(contour, &mut approx, epsilon, true)?;
        if approx.len() != 4 {
            return Ok(Verdict::Rejected(Rejection::VertexCount(approx.len())));
        }

        let rect = CanonicalRect::from(min_area_rect(contour)?);
        if let Some(rejection) = self.check_geometry(&rect) {
            return Ok(Verdict::Rejected(rejection));
        }

        let bbox = bounding_rect(contour)?;
        let Some(roi) = crop_roi(frame, bbox)? else {
            return Ok(Verdict::Rejected(Rejection::EmptyRegion));
        };

        let lines = self.line_detector.detect(&roi)?;
        if lines.len() < self.min_lines {
            return Ok(Verdict::Rejected(Rejection::NoHorizontalLines));
        }

        Ok(Verdict::Shelf(BoundingBox::from(bbox)))
    }

    fn check_geometry(&self, rect: &CanonicalRect) -> Option<Rejection> {
        let aspect_ratio = rect.aspect_ratio();
        if rect.width <= self.min_width {
            Some(Rejection::TooNarrow(rect.width))
        } else if aspect_ratio <= self.min_aspect_ratio || aspect_ratio >= self.max_aspect_ratio {
            Some(Rejection::AspectRatio(aspect_ratio))
        } else if rect.angle.abs() >= self.max_tilt {
            Some(Rejection::Tilted(rect.angle))
        } else {
            None
        }
    }
}
