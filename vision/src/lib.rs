mod config;
mod preprocess;
mod render;
mod utils;
mod vision;

use opencv::core::Mat;
use preprocess::{normalize_frame, preprocess_frame};
use vision::{classifier::ShelfClassifier, proposals::contours::extract_contours};

pub use config::ShelfParams;
pub use render::{draw_shelf_count, palette_color, zone_segments, ZoneRenderer, PALETTE};
pub use vision::classifier::{geometry::CanonicalRect, lines::{HorizontalLineDetector, LineSegment}, Rejection, Verdict};
pub use vision::proposals::{bounding_box::BoundingBox, contours::Contour};
pub use vision::stabilizer::{cluster::{cluster_by_seed, Cluster}, history::DetectionHistory, TemporalStabilizer};

/// Detections of one frame together with the boxes that are stable so far.
#[derive(Debug, Clone, Default)]
pub struct FrameResult {
    pub detections: Vec<BoundingBox>,
    pub stable: Vec<BoundingBox>,
}

pub struct ShelfDetector {
    params: ShelfParams,
    classifier: ShelfClassifier,
    stabilizer: TemporalStabilizer,
    renderer: ZoneRenderer,
}

impl ShelfDetector {
    pub fn new(params: ShelfParams) -> anyhow::Result<Self> {
        params.validate()?;

        Ok(Self {
            classifier: ShelfClassifier::new(&params),
            stabilizer: TemporalStabilizer::from_params(&params),
            renderer: ZoneRenderer::new(params.zone_alpha),
            params,
        })
    }

    pub fn params(&self) -> &ShelfParams {
        &self.params
    }

    pub fn stabilizer(&self) -> &TemporalStabilizer {
        &self.stabilizer
    }

    /// Resizes a captured frame to the configured size.
    pub fn normalize(&self, img: &Mat) -> anyhow::Result<Mat> {
        normalize_frame(img, &self.params)
    }

    /// Shelf candidates of a single frame. Does not touch the history.
    pub fn detect(&self, img: &Mat) -> anyhow::Result<Vec<BoundingBox>> {
        let edges = preprocess_frame(img, &self.params)?;
        let contours = extract_contours(&edges, self.params.min_contour_area)?;

        let mut detections = Vec::new();
        for contour in &contours {
            match self.classifier.classify(contour, img)? {
                Verdict::Shelf(bbox) => detections.push(bbox),
                Verdict::Rejected(reason) => log::trace!("Contour rejected: {reason:?}"),
            }
        }

        Ok(detections)
    }

    pub fn process_frame(&mut self, img: &Mat) -> anyhow::Result<FrameResult> {
        let detections = self.detect(img)?;
        let stable = self.stabilizer.observe(detections.clone());
        log::debug!("{} detections, {} stable shelves", detections.len(), stable.len());

        Ok(FrameResult { detections, stable })
    }

    /// Zones and the shelf count drawn on a copy of `img`.
    pub fn annotate(&self, img: &Mat, stable: &[BoundingBox]) -> anyhow::Result<Mat> {
        let mut output = self.renderer.render(img, stable)?;
        draw_shelf_count(&mut output, stable.len())?;
        Ok(output)
    }
}
