use anyhow::{bail, Ok};
use opencv::{core::{Mat, MatTraitConst, Size, CV_8UC1, CV_8UC3}, imgproc::{canny_def, cvt_color_def, gaussian_blur_def, resize, COLOR_BGR2GRAY, INTER_LINEAR}};

use crate::config::ShelfParams;


/// Resizes the frame to the configured size. Frames already at that size are cloned as-is.
pub fn normalize_frame(img: &Mat, params: &ShelfParams) -> anyhow::Result<Mat> {
    let target = Size::new(params.frame_width, params.frame_height);
    if img.size()? == target {
        return Ok(img.clone());
    }

    let mut resized = Mat::default();
    resize(img, &mut resized, target, 0.0, 0.0, INTER_LINEAR)?;
    Ok(resized)
}

pub fn to_gray(img: &Mat) -> anyhow::Result<Mat> {
    let mut img_gray = Mat::default();
    match img.typ() {
        CV_8UC1 => {
            img_gray = img.clone();
        },
        CV_8UC3 => {
            cvt_color_def(img, &mut img_gray, COLOR_BGR2GRAY)?;
        },
        _ => {
            bail!("Image of unknown color type");
        }
    }

    Ok(img_gray)
}

/// Grayscale, blur and Canny. The result is a binary edge map of the same size.
pub fn preprocess_frame(img: &Mat, params: &ShelfParams) -> anyhow::Result<Mat> {
    let img_gray = to_gray(img)?;

    let mut img_blur = Mat::default();
    gaussian_blur_def(&img_gray, &mut img_blur, Size::new(params.blur_kernel, params.blur_kernel), 0.0)?;

    let mut edges = Mat::default();
    canny_def(&img_blur, &mut edges, params.canny_low, params.canny_high)?;

    Ok(edges)
}
