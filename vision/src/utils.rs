use opencv::{core::{Mat, Rect, Size}, prelude::*};


/// Clips `rect` to an image of the given size. The result may be empty.
pub fn clamp_rect(rect: Rect, size: Size) -> Rect {
    let x0 = rect.x.clamp(0, size.width);
    let y0 = rect.y.clamp(0, size.height);
    let x1 = (rect.x + rect.width).clamp(0, size.width);
    let y1 = (rect.y + rect.height).clamp(0, size.height);

    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// Owned copy of the region of `mat` under `rect`, clipped to the image.
pub fn crop_roi(mat: &Mat, rect: Rect) -> anyhow::Result<Option<Mat>> {
    let rect = clamp_rect(rect, mat.size()?);
    if rect.width == 0 || rect.height == 0 {
        return Ok(None);
    }

    let roi = Mat::roi(mat, rect)?;
    Ok(Some(roi.try_clone()?))
}
