use opencv::{
    core::{Mat, Point, Vector},
    imgproc::{find_contours_def, CHAIN_APPROX_SIMPLE, RETR_EXTERNAL},
};

use super::filter::filter_too_small_contours;

/// Closed boundary as returned by `find_contours`.
pub type Contour = Vector<Point>;

/// Outer contours of a binary edge map, without the ones enclosing less than `min_area` pixels.
pub fn extract_contours(edges: &Mat, min_area: f64) -> anyhow::Result<Vec<Contour>> {
    // Countours (outer boundaries only)
    let mut contours: Vector<Contour> = Vector::new();
    find_contours_def(edges, &mut contours, RETR_EXTERNAL, CHAIN_APPROX_SIMPLE)?;

    let found = contours.len();
    let kept = filter_too_small_contours(contours.to_vec(), min_area)?;
    log::trace!("{found} contours, {} above {min_area} px", kept.len());

    Ok(kept)
}
