use opencv::{
    core::{Mat, Point, Rect, Scalar, CV_8UC3},
    imgproc::{circle, line, rectangle, FILLED, LINE_8},
};

pub fn blank(width: i32, height: i32) -> Mat {
    Mat::new_rows_cols_with_default(height, width, CV_8UC3, Scalar::all(0.0)).unwrap()
}

/// Light panel with dark horizontal rails, drawn on a black frame.
pub fn draw_shelf(frame: &mut Mat, panel: Rect, rails: usize) {
    rectangle(frame, panel, Scalar::new(200.0, 200.0, 200.0, 0.0), FILLED, LINE_8, 0).unwrap();

    let inset = panel.width / 16;
    for i in 1..=rails {
        let y = panel.y + panel.height * i as i32 / (rails as i32 + 1);
        line(
            frame,
            Point::new(panel.x + inset, y),
            Point::new(panel.x + panel.width - inset, y),
            Scalar::new(40.0, 40.0, 40.0, 0.0),
            3,
            LINE_8,
            0,
        )
        .unwrap();
    }
}

pub fn shelf_frame(panel: Rect) -> Mat {
    let mut frame = blank(640, 480);
    draw_shelf(&mut frame, panel, 2);
    frame
}

pub fn disc_frame() -> Mat {
    let mut frame = blank(640, 480);
    circle(&mut frame, Point::new(320, 240), 100, Scalar::all(200.0), FILLED, LINE_8, 0).unwrap();
    frame
}
