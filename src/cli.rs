use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneKind {
    /// Trajectory of a projectile under gravity and wind
    Projectile,
    /// Twelve hour marks of a clock face
    Clock,
    /// Flat silhouette of a unit sphere
    Silhouette,
}

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
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ray_kernel")]
#[command(about = "Renders the sample scenes of the ray tracing kernel")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "silhouette")]
    pub scene: SceneKind,

    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 100)]
    pub size: u32,

    /// Output file, the extension picks the format (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
