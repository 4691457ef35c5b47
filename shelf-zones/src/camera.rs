use anyhow::{bail, Context};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{VideoCapture, CAP_ANY, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};

/// Video input: a stream or file when one opens, a local camera otherwise.
pub struct FrameSource {
    cap: VideoCapture,
    name: String,
}

impl FrameSource {
    pub fn open(stream: Option<&str>, camera: i32, width: i32, height: i32) -> anyhow::Result<Self> {
        let mut source = match stream.and_then(open_stream) {
            Some(source) => source,
            None => open_camera(camera)?,
        };

        source.cap.set(CAP_PROP_FRAME_WIDTH, width as f64)?;
        source.cap.set(CAP_PROP_FRAME_HEIGHT, height as f64)?;
        log::info!("Reading frames from {}", source.name);

        Ok(source)
    }

    /// Next frame, or `None` once the source stops delivering.
    pub fn next_frame(&mut self) -> anyhow::Result<Option<Mat>> {
        let mut frame = Mat::default();
        let got_frame = self
            .cap
            .read(&mut frame)
            .with_context(|| format!("Failed to read from {}", self.name))?;

        if !got_frame || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn open_stream(url: &str) -> Option<FrameSource> {
    match VideoCapture::from_file(url, CAP_ANY) {
        Ok(cap) if cap.is_opened().unwrap_or(false) => Some(FrameSource { cap, name: url.to_string() }),
        Ok(_) => {
            log::warn!("Failed to open stream {url}, trying camera");
            None
        }
        Err(e) => {
            log::warn!("Failed to open stream {url}, trying camera: {e}");
            None
        }
    }
}

fn open_camera(index: i32) -> anyhow::Result<FrameSource> {
    let cap = VideoCapture::new(index, CAP_ANY)?;
    if !cap.is_opened()? {
        bail!("No camera found at index {index}");
    }

    Ok(FrameSource { cap, name: format!("camera {index}") })
}
