mod common;

use common::synthetic_frame::{blank, disc_frame, draw_shelf, shelf_frame};
use opencv::core::{Rect, Size, Vec3b};
use opencv::prelude::*;
use shelf_vision::{BoundingBox, ShelfDetector, ShelfParams};

const PANEL: Rect = Rect { x: 120, y: 150, width: 360, height: 120 };

fn detector() -> ShelfDetector {
    ShelfDetector::new(ShelfParams::default()).unwrap()
}

fn assert_near_panel(b: &BoundingBox, panel: Rect) {
    let iou = b.iou(&BoundingBox::from(panel));
    assert!(iou > 0.9, "box {b:?} too far from {panel:?} (iou {iou:.3})");
}

#[test]
fn detects_a_shelf_panel() {
    let detections = detector().detect(&shelf_frame(PANEL)).unwrap();

    assert_eq!(detections.len(), 1, "{detections:?}");
    assert_near_panel(&detections[0], PANEL);
}

#[test]
fn blank_frame_yields_nothing() {
    let mut detector = detector();
    let result = detector.process_frame(&blank(640, 480)).unwrap();

    assert!(result.detections.is_empty());
    assert!(result.stable.is_empty());
    assert_eq!(detector.stabilizer().history().len(), 1);
}

#[test]
fn round_and_upright_shapes_are_not_shelves() {
    let detector = detector();
    assert!(detector.detect(&disc_frame()).unwrap().is_empty());

    // Long side is vertical, so it reads as tilted by 90 degrees
    let mut upright = blank(640, 480);
    draw_shelf(&mut upright, Rect::new(240, 100, 160, 300), 3);
    assert!(detector.detect(&upright).unwrap().is_empty());
}

#[test]
fn narrow_panel_is_not_a_shelf() {
    let mut frame = blank(640, 480);
    draw_shelf(&mut frame, Rect::new(200, 200, 120, 50), 1);
    assert!(detector().detect(&frame).unwrap().is_empty());
}

#[test]
fn stable_box_follows_a_jittering_shelf() {
    let mut detector = detector();
    let mut stable = Vec::new();
    for i in 0..6 {
        let shift = (i % 3) * 2 - 2;
        let panel = Rect::new(PANEL.x + shift, PANEL.y - shift, PANEL.width, PANEL.height);
        stable = detector.process_frame(&shelf_frame(panel)).unwrap().stable;
    }

    assert_eq!(stable.len(), 1);
    assert_near_panel(&stable[0], PANEL);
}

#[test]
fn shelf_fades_once_it_is_a_minority_of_the_window() {
    let mut detector = detector();
    for _ in 0..3 {
        detector.process_frame(&shelf_frame(PANEL)).unwrap();
    }

    // Three sightings stay stable while the window holds at most 7 frames
    for _ in 0..4 {
        assert_eq!(detector.process_frame(&blank(640, 480)).unwrap().stable.len(), 1);
    }
    assert!(detector.process_frame(&blank(640, 480)).unwrap().stable.is_empty());
}

#[test]
fn two_shelves_are_reported_top_first() {
    let lower = Rect::new(100, 300, 400, 110);
    let upper = Rect::new(140, 60, 360, 120);
    let mut frame = blank(640, 480);
    draw_shelf(&mut frame, lower, 2);
    draw_shelf(&mut frame, upper, 2);

    let stable = detector().process_frame(&frame).unwrap().stable;
    assert_eq!(stable.len(), 2, "{stable:?}");
    assert_near_panel(&stable[0], upper);
    assert_near_panel(&stable[1], lower);
}

#[test]
fn oversized_frames_are_normalized_before_detection() {
    let detector = detector();
    let mut big = blank(1280, 960);
    draw_shelf(&mut big, Rect::new(PANEL.x * 2, PANEL.y * 2, PANEL.width * 2, PANEL.height * 2), 2);

    let frame = detector.normalize(&big).unwrap();
    assert_eq!(frame.size().unwrap(), Size::new(640, 480));

    let detections = detector.detect(&frame).unwrap();
    assert_eq!(detections.len(), 1);
    assert_near_panel(&detections[0], PANEL);
}

#[test]
fn annotation_draws_on_a_copy() {
    let mut detector = detector();
    let frame = shelf_frame(PANEL);
    let result = detector.process_frame(&frame).unwrap();

    let output = detector.annotate(&frame, &result.stable).unwrap();
    assert_eq!(output.size().unwrap(), frame.size().unwrap());

    // Inside the first zone of the panel, away from the rails
    let before = *frame.at_2d::<Vec3b>(170, 200).unwrap();
    let after = *output.at_2d::<Vec3b>(170, 200).unwrap();
    assert_eq!(before, Vec3b::from([200, 200, 200]));
    assert_ne!(after, before);
}
