use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "shelf-zones", about = "Detects shelves in a live video stream and overlays inventory zones")]
pub struct Args {
    /// Stream URL or video file to read first, e.g. an IP camera
    #[arg(long, value_name = "URL")]
    pub stream: Option<String>,
    /// Local camera used when the stream is missing or cannot be opened
    #[arg(long, default_value_t = 0)]
    pub camera: i32,
    /// TOML file overriding detection thresholds
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
    /// Do not open a window, only log the shelf count
    #[arg(long)]
    pub headless: bool,
    /// Stop after this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["shelf-zones"]);
        assert_eq!(args.stream, None);
        assert_eq!(args.camera, 0);
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(!args.headless);
        assert_eq!(args.max_frames, None);
    }

    #[test]
    fn parses_all_options() {
        let args = Args::parse_from([
            "shelf-zones",
            "--stream",
            "http://192.168.2.24:4747/video",
            "--camera",
            "2",
            "--config",
            "shelves.toml",
            "--log-level",
            "debug",
            "--headless",
            "--max-frames",
            "300",
        ]);
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert_eq!(args.stream.as_deref(), Some("http://192.168.2.24:4747/video"));
        assert_eq!(args.camera, 2);
        assert_eq!(args.config, Some(PathBuf::from("shelves.toml")));
        assert!(args.headless);
        assert_eq!(args.max_frames, Some(300));
    }

    #[test]
    fn unknown_log_level_is_refused() {
        assert!(Args::try_parse_from(["shelf-zones", "--log-level", "verbose"]).is_err());
    }
}
