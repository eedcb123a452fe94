#![deny(clippy::all, clippy::pedantic)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use raymarch::Raymarcher;
use render::render_frame;
use std::time::Instant;

const FRAME_DT: f32 = 1.0 / 30.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = cli::Args::parse();
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let marcher = Raymarcher::new();
    tracing::info!(
        width = args.width,
        height = args.height,
        frames = args.frames,
        "starting render"
    );

    for frame in 0..args.frames {
        #[allow(clippy::cast_precision_loss)]
        let time = frame as f32 * FRAME_DT;
        let params = args.params_at(time);

        let started = Instant::now();
        let image = render_frame(&marcher, args.width, args.height, &params)
            .context("rendering frame")?;
        let path = args.output.join(format!("frame_{frame:04}.png"));
        image
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!(
            frame,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            path = %path.display(),
            "frame written"
        );
    }

    tracing::info!("render finished after {} frame(s)", args.frames);
    Ok(())
}
