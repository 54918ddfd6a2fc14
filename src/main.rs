use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use nalgebra::Point3;

use ray_scatter::camera::Camera;
use ray_scatter::config::RenderConfig;
use ray_scatter::render::render_image;
use ray_scatter::scene::Scene;
use ray_scatter::Result;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
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

/// Renders the demo scene to an image file.
#[derive(Parser)]
#[command(name = "ray-scatter")]
struct Args {
    /// Output file; the format follows the extension (.png, .ppm, ...)
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 225)]
    height: u32,

    #[arg(short, long, default_value_t = 100)]
    samples: u32,

    /// Maximum number of bounces per ray
    #[arg(short, long, default_value_t = 50)]
    depth: u32,

    /// Seed for a reproducible render
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(args.log_level.into())
        .init();

    let config = RenderConfig::new()
        .width(args.width)
        .height(args.height)
        .samples_per_pixel(args.samples)
        .max_depth(args.depth)
        .seed(args.seed);

    let scene = Scene::weekend()?;
    let camera = Camera::new(Point3::origin(), 1.0);

    let image = render_image(&scene, &camera, &config)?;
    image.save(&args.output)?;
    info!(target: "app", "Wrote {}", args.output.display());
    Ok(())
}
