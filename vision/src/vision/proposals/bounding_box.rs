use nalgebra::Vector4;
use opencv::core::Rect;

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    pub fn intersection_area(&self, other: &BoundingBox) -> i64 {
        let iw = overlap(self.x, self.w, other.x, other.w);
        let ih = overlap(self.y, self.h, other.y, other.h);
        iw * ih
    }

    /// Intersection over union. Zero when the union is empty.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let inter = self.intersection_area(other);
        let union = self.area() + other.area() - inter;
        if union > 0 {
            inter as f64 / union as f64
        } else {
            0.0
        }
    }

    pub(crate) fn as_vector(&self) -> Vector4<f64> {
        Vector4::new(self.x as f64, self.y as f64, self.w as f64, self.h as f64)
    }

    pub(crate) fn from_vector(v: &Vector4<f64>) -> Self {
        Self::new(
            v.x.round() as i32,
            v.y.round() as i32,
            v.z.round() as i32,
            v.w.round() as i32,
        )
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Length of the overlap of two 1-D spans, in `i64` so extents near `i32::MAX` cannot overflow.
fn overlap(a: i32, a_len: i32, b: i32, b_len: i32) -> i64 {
    let end = (a as i64 + a_len as i64).min(b as i64 + b_len as i64);
    (end - (a as i64).max(b as i64)).max(0)
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}
