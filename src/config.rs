//! Run configuration and the command line that fills it.
use std::path::PathBuf;

use clap::Parser;

use crate::core::movement::{DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_STEP};
use crate::core::player::Vec2;

pub const DEFAULT_SCREEN_WIDTH: u32 = 640;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 480;
pub const DEFAULT_FPS: u32 = 60;

/// Explore one or more grid mazes in first person. Reach the goal cell of
/// each maze to move on to the next.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maze files, played in the order given.
    #[arg(value_name = "MAZE", required = true, num_args = 1..)]
    pub mazes: Vec<PathBuf>,
    /// Window width in pixels (one ray per pixel column).
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_SCREEN_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Window height in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_SCREEN_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    /// Cells moved per tick while walking, strictly between 0 and 1.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_MOVE_SPEED,
        value_parser = parse_speed)]
    pub speed: f64,
    /// Frame rate cap.
    #[arg(long, value_name = "FPS", default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
    /// Also write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Collision only looks at the cell a step lands in, so a step of a whole
/// cell or more could jump over a one-cell wall.
fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if speed > 0.0 && speed < 1.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be greater than 0 and less than 1, got {s}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mazes: Vec<PathBuf>,
    pub screen_width: u32,
    pub screen_height: u32,
    pub move_speed: f64,
    pub rotation_step: f64,
    /// Facing direction every level starts with.
    pub start_dir: Vec2,
    /// Camera plane every level starts with; its length against `start_dir` sets the FOV.
    pub start_plane: Vec2,
    pub fps: u32,
    pub title: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mazes: Vec::new(),
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_step: DEFAULT_ROTATION_STEP,
            start_dir: Vec2::new(-1.0, 0.0),
            start_plane: Vec2::new(0.0, 0.5),
            fps: DEFAULT_FPS,
            title: "MAZE".to_string(),
            log_file: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            mazes: cli.mazes,
            screen_width: cli.width,
            screen_height: cli.height,
            move_speed: cli.speed,
            fps: cli.fps,
            log_file: cli.log_file,
            ..Config::default()
        }
    }
}
