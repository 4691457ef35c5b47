use opencv::imgproc::contour_area;

use super::contours::Contour;


pub fn filter_too_small_contours(contours: Vec<Contour>, min_area: f64) -> anyhow::Result<Vec<Contour>> {
    let mut kept = Vec::with_capacity(contours.len());
    for contour in contours {
        if contour_area(&contour, false)? >= min_area {
            kept.push(contour);
        }
    }

    Ok(kept)
}
