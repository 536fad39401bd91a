use anyhow::Result;
use clap::Parser;
use plyview_viewer::{RenderConfig, ViewerApp};
use std::path::PathBuf;

/// Interactive PLY point-cloud viewer
#[derive(Parser, Debug)]
#[command(name = "plyview", version, about)]
struct Args {
    /// PLY file to load at startup
    path: Option<PathBuf>,

    /// Color for points in files without vertex colors, as "R,G,B" (0-255)
    #[arg(long, value_name = "R,G,B", value_parser = parse_color, default_value = "255,255,255")]
    color: [u8; 3],

    /// Disable depth testing
    #[arg(long)]
    no_depth: bool,
}

fn parse_color(value: &str) -> Result<[u8; 3], String> {
    let channels: Vec<&str> = value.split(',').collect();
    if channels.len() != 3 {
        return Err(format!("expected three channels, got {}", channels.len()));
    }

    let mut color = [0u8; 3];
    for (slot, channel) in color.iter_mut().zip(&channels) {
        *slot = channel
            .trim()
            .parse()
            .map_err(|e| format!("invalid channel '{}': {}", channel, e))?;
    }
    Ok(color)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = RenderConfig {
        point_color: args.color,
        enable_depth_test: !args.no_depth,
        ..RenderConfig::default()
    };

    ViewerApp::new(config).run(args.path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_color_triple() {
        assert_eq!(parse_color("255,0,128").unwrap(), [255, 0, 128]);
        assert_eq!(parse_color(" 10, 20, 30 ").unwrap(), [10, 20, 30]);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_color("255,0").is_err());
        assert!(parse_color("1,2,3,4").is_err());
        assert!(parse_color("255,0,300").is_err());
        assert!(parse_color("red,green,blue").is_err());
    }

    #[test]
    fn color_flag_reaches_the_render_config() {
        let args = Args::parse_from(["plyview", "--color", "12,34,56", "cloud.ply"]);
        assert_eq!(args.color, [12, 34, 56]);
        assert_eq!(args.path, Some(PathBuf::from("cloud.ply")));
    }
}
