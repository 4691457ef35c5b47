use opencv::{
    core::{add_weighted, Mat, Point, Scalar},
    imgproc::{put_text, rectangle_points, FILLED, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};

use crate::vision::proposals::bounding_box::BoundingBox;

/// Zone fill colors (BGR), used in order and wrapped around.
pub const PALETTE: [(f64, f64, f64); 8] = [
    (255.0, 0.0, 0.0),
    (0.0, 255.0, 0.0),
    (0.0, 0.0, 255.0),
    (0.0, 255.0, 255.0),
    (255.0, 0.0, 255.0),
    (255.0, 255.0, 0.0),
    (100.0, 255.0, 100.0),
    (255.0, 100.0, 100.0),
];

const BOX_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
const ZONE_BORDER_COLOR: (f64, f64, f64) = (0.0, 0.0, 0.0);
const COUNT_COLOR: (f64, f64, f64) = (0.0, 255.0, 255.0);

fn scalar((b, g, r): (f64, f64, f64)) -> Scalar {
    Scalar::new(b, g, r, 0.0)
}

pub fn palette_color(i: usize) -> Scalar {
    scalar(PALETTE[i % PALETTE.len()])
}

/// Splits a box into 3 zones on even positions and 4 on odd ones, left to right.
/// The last zone takes whatever the integer division leaves over.
pub fn zone_segments(bbox: &BoundingBox, ordinal: usize) -> Vec<BoundingBox> {
    let count = if ordinal % 2 == 0 { 3 } else { 4 };
    let step = bbox.w / count;

    (0..count)
        .map(|i| {
            let x = bbox.x + i * step;
            let w = if i < count - 1 { step } else { bbox.right() - x };
            BoundingBox::new(x, bbox.y, w, bbox.h)
        })
        .collect()
}

pub struct ZoneRenderer {
    alpha: f64,
}

impl ZoneRenderer {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Draws the zones of every box onto a copy of `frame`.
    pub fn render(&self, frame: &Mat, shelves: &[BoundingBox]) -> anyhow::Result<Mat> {
        let mut out = frame.try_clone()?;

        for (idx, shelf) in shelves.iter().enumerate() {
            draw_outline(&mut out, shelf, scalar(BOX_COLOR))?;

            for (i, zone) in zone_segments(shelf, idx).iter().enumerate() {
                let mut overlay = out.try_clone()?;
                rectangle_points(&mut overlay, top_left(zone), bottom_right(zone), palette_color(i), FILLED, LINE_8, 0)?;

                let mut blended = Mat::default();
                add_weighted(&overlay, self.alpha, &out, 1.0 - self.alpha, 0.0, &mut blended, -1)?;
                out = blended;

                draw_outline(&mut out, zone, scalar(ZONE_BORDER_COLOR))?;
            }
        }

        Ok(out)
    }
}

pub fn draw_shelf_count(img: &mut Mat, count: usize) -> anyhow::Result<()> {
    put_text(
        img,
        &format!("Detected shelves: {count}"),
        Point::new(10, 30),
        FONT_HERSHEY_SIMPLEX,
        0.8,
        scalar(COUNT_COLOR),
        2,
        LINE_8,
        false,
    )?;

    Ok(())
}

fn top_left(b: &BoundingBox) -> Point {
    Point::new(b.x, b.y)
}

fn bottom_right(b: &BoundingBox) -> Point {
    Point::new(b.right(), b.bottom())
}

fn draw_outline(img: &mut Mat, b: &BoundingBox, color: Scalar) -> anyhow::Result<()> {
    rectangle_points(img, top_left(b), bottom_right(b), color, 2, LINE_8, 0)?;
    Ok(())
}
