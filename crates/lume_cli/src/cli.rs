//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// The bundled demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Random sphere field around three large feature spheres.
    Cover,
    /// Three spheres head on, one a hollow glass shell.
    ThreeSpheres,
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lume")]
#[command(about = "A CPU path tracer producing PPM or PNG images")]
pub struct Args {
    /// Image width in pixels; height follows from the fixed 3:2 aspect
    #[arg(long, default_value = "600")]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "20")]
    pub samples_per_pixel: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value = "20")]
    pub max_depth: u32,

    /// Seed for scene placement and pixel sampling
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Scene to render
    #[arg(long, value_enum, default_value = "cover")]
    pub scene: SceneKind,

    /// Output file (.ppm or any image-crate format); "-" writes PPM to stdout
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
