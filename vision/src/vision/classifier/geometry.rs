use opencv::core::RotatedRect;

/// Minimum-area rectangle with the long side as `width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalRect {
    pub width: f32,
    pub height: f32,
    /// Tilt of the long side in degrees, within (-90, 90]
    pub angle: f32,
}

impl CanonicalRect {
    pub fn new(width: f32, height: f32, angle: f32) -> Self {
        let (width, height, angle) = if width < height {
            (height, width, angle + 90.0)
        } else {
            (width, height, angle)
        };

        Self { width, height, angle: normalize_angle(angle) }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height != 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }
}

impl From<RotatedRect> for CanonicalRect {
    fn from(rect: RotatedRect) -> Self {
        CanonicalRect::new(rect.size.width, rect.size.height, rect.angle)
    }
}

// A rectangle is unchanged by a half turn, so angles are folded into (-90, 90]
// regardless of which range the OpenCV build reports.
fn normalize_angle(angle: f32) -> f32 {
    let folded = angle % 180.0;
    if folded > 90.0 {
        folded - 180.0
    } else if folded <= -90.0 {
        folded + 180.0
    } else {
        folded
    }
}
