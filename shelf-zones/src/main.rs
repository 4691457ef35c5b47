mod camera;
mod cli;

use clap::Parser;
use log::LevelFilter;
use opencv::highgui::{destroy_all_windows, imshow, wait_key};
use shelf_vision::{ShelfDetector, ShelfParams};

use camera::FrameSource;
use cli::Args;

const WINDOW_NAME: &str = "Shelf Detection";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level)?;

    let params = match &args.config {
        Some(path) => {
            log::info!("Loading thresholds from {}", path.display());
            ShelfParams::load(path)?
        }
        None => ShelfParams::default(),
    };
    let mut detector = ShelfDetector::new(params)?;

    let params = detector.params();
    let mut source = FrameSource::open(args.stream.as_deref(), args.camera, params.frame_width, params.frame_height)?;

    log::info!("Starting main loop");
    let res = run_loop(&mut detector, &mut source, &args);

    if !args.headless {
        destroy_all_windows()?;
    }

    res
}

fn run_loop(detector: &mut ShelfDetector, source: &mut FrameSource, args: &Args) -> anyhow::Result<()> {
    let mut frame_count: u64 = 0;

    loop {
        if args.max_frames.is_some_and(|max| frame_count >= max) {
            log::info!("Stopping after {frame_count} frames");
            return Ok(());
        }

        let Some(frame) = source.next_frame()? else {
            log::error!("Frame not received from {}", source.name());
            return Ok(());
        };
        frame_count += 1;

        let frame = detector.normalize(&frame)?;
        let result = detector.process_frame(&frame)?;

        if args.headless {
            log::info!("Frame {frame_count}: {} stable shelves", result.stable.len());
            continue;
        }

        let output = detector.annotate(&frame, &result.stable)?;
        imshow(WINDOW_NAME, &output)?;

        if wait_key(1)? & 0xFF == 'q' as i32 {
            log::info!("Quit requested");
            return Ok(());
        }
    }
}

fn setup_logging(level: LevelFilter) -> anyhow::Result<()> {
    simple_log::quick!(level.as_str()).map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))
}
