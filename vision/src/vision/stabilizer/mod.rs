use itertools::Itertools;

use cluster::cluster_by_seed;
use history::DetectionHistory;

use crate::config::ShelfParams;

use super::proposals::bounding_box::BoundingBox;

pub mod cluster;
pub mod history;

/// Turns noisy per-frame detections into boxes that held up over the recent frames.
#[derive(Debug, Clone)]
pub struct TemporalStabilizer {
    history: DetectionHistory,
    iou_threshold: f64,
}

impl TemporalStabilizer {
    pub fn new(capacity: usize, iou_threshold: f64) -> Self {
        Self {
            history: DetectionHistory::new(capacity),
            iou_threshold,
        }
    }

    pub fn from_params(params: &ShelfParams) -> Self {
        Self::new(params.history_capacity, params.cluster_iou)
    }

    pub fn history(&self) -> &DetectionHistory {
        &self.history
    }

    /// Records this frame's detections and returns the stable boxes, top of the frame first.
    pub fn observe(&mut self, detections: Vec<BoundingBox>) -> Vec<BoundingBox> {
        self.history.push(detections);

        let min_members = self.history.len() / 2;
        let clusters = cluster_by_seed(self.history.detections(), self.iou_threshold);
        log::trace!("{} clusters over {} frames, promoting at {min_members} members", clusters.len(), self.history.len());

        clusters
            .iter()
            .filter(|c| c.members.len() >= min_members)
            .map(|c| c.mean_box())
            .sorted_by_key(|b| b.y)
            .collect()
    }
}
