mod cli;

use anyhow::Context;
use clap::Parser;
use ray_kernel_lib::{canvas::Canvas, demo};

use cli::{Args, SceneKind};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::level_filters::LevelFilter::from(args.log_level))
        .init();

    let mut canvas = Canvas::new(args.size, args.size);
    match args.scene {
        SceneKind::Projectile => {
            demo::projectile(&mut canvas).context("projectile scene")?;
        }
        SceneKind::Clock => demo::clock(&mut canvas).context("clock scene")?,
        SceneKind::Silhouette => {
            demo::silhouette(&mut canvas).context("silhouette scene")?;
        }
    }

    canvas
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
