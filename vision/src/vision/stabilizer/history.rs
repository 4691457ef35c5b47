use std::collections::VecDeque;

use crate::vision::proposals::bounding_box::BoundingBox;

/// Detection sets of the most recent frames, oldest first.
#[derive(Debug, Clone)]
pub struct DetectionHistory {
    frames: VecDeque<Vec<BoundingBox>>,
    capacity: usize,
}

impl DetectionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, detections: Vec<BoundingBox>) {
        self.frames.push_back(detections);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> impl Iterator<Item = &[BoundingBox]> {
        self.frames.iter().map(|f| f.as_slice())
    }

    /// Every retained detection, oldest frame first.
    pub fn detections(&self) -> impl Iterator<Item = BoundingBox> + '_ {
        self.frames.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(i: i32) -> Vec<BoundingBox> {
        (0..(i % 3)).map(|k| BoundingBox::new(i, k, 10, 10)).collect()
    }

    #[test]
    fn keeps_last_frames_in_arrival_order() {
        let mut history = DetectionHistory::new(15);
        for i in 0..20 {
            history.push(frame(i));
        }

        assert_eq!(history.len(), 15);
        let kept: Vec<Vec<BoundingBox>> = history.frames().map(|f| f.to_vec()).collect();
        let expected: Vec<Vec<BoundingBox>> = (5..20).map(frame).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn grows_until_capacity() {
        let mut history = DetectionHistory::new(15);
        assert!(history.is_empty());
        for i in 1..=7 {
            history.push(Vec::new());
            assert_eq!(history.len(), i);
        }
    }

    #[test]
    fn flattens_oldest_first() {
        let mut history = DetectionHistory::new(2);
        history.push(vec![BoundingBox::new(0, 0, 1, 1)]);
        history.push(vec![BoundingBox::new(1, 0, 1, 1), BoundingBox::new(2, 0, 1, 1)]);
        history.push(vec![BoundingBox::new(3, 0, 1, 1)]);

        let xs: Vec<i32> = history.detections().map(|b| b.x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
    }
}
