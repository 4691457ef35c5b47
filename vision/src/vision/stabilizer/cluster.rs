use std::collections::VecDeque;

use nalgebra::Vector4;

use crate::vision::proposals::bounding_box::BoundingBox;

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub members: Vec<BoundingBox>,
}

impl Cluster {
    /// Per-field mean of the members, rounded to the nearest pixel.
    pub fn mean_box(&self) -> BoundingBox {
        let sum: Vector4<f64> = self.members.iter().map(BoundingBox::as_vector).sum();
        BoundingBox::from_vector(&(sum / self.members.len().max(1) as f64))
    }
}

/// Greedy grouping around seeds.
///
/// The first remaining box is the seed, every other box overlapping the seed by more than
/// `iou_threshold` joins it. Members are never compared with each other, so overlap is not
/// transitive: a box that only overlaps a member starts a cluster of its own.
pub fn cluster_by_seed(boxes: impl IntoIterator<Item = BoundingBox>, iou_threshold: f64) -> Vec<Cluster> {
    let mut remaining: VecDeque<BoundingBox> = boxes.into_iter().collect();
    let mut clusters = Vec::new();

    while let Some(seed) = remaining.pop_front() {
        let (joined, rest): (VecDeque<BoundingBox>, VecDeque<BoundingBox>) = remaining
            .into_iter()
            .partition(|b| seed.iou(b) > iou_threshold);
        remaining = rest;

        let mut members = Vec::with_capacity(joined.len() + 1);
        members.push(seed);
        members.extend(joined);
        clusters.push(Cluster { members });
    }

    clusters
}
