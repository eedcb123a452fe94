//! Command line surface. Range validation happens here; the kernel assumes
//! already-valid parameters.

use clap::Parser;
use raymarch::RenderParams;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "volumetric-light-lab",
    about = "Offline renderer for a raymarched scene with volumetric spotlight scattering"
)]
pub struct Args {
    /// Output image width in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Output image height in pixels.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Directory PNG frames are written into.
    #[arg(long, default_value = "out")]
    pub output: PathBuf,

    /// Scattering density multiplier (> 0).
    #[arg(long, default_value_t = 2.5, value_parser = parse_positive)]
    pub density: f32,

    /// Henyey-Greenstein anisotropy, in [-1, 1].
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true, value_parser = parse_anisotropy)]
    pub scattering_g: f32,

    /// Spotlight orbital angle in radians.
    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    pub light_angle: f32,

    /// Volumetric integration steps (>= 1; capped internally at 100).
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,

    /// Disable per-pixel jitter of the integration start offset.
    #[arg(long)]
    pub no_dither: bool,

    /// Soft shadow sharpness (> 0); larger is harder-edged.
    #[arg(long, default_value_t = 16.0, value_parser = parse_positive)]
    pub shadow_softness: f32,

    /// Light orbit speed in radians per second of simulated time
    /// (frames advance at 30 fps).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub orbit_speed: f32,
}

impl Args {
    /// Kernel parameters for simulated time `time` seconds.
    #[must_use]
    pub fn params_at(&self, time: f32) -> RenderParams {
        RenderParams {
            density: self.density,
            scattering_g: self.scattering_g,
            light_angle: self.light_angle + self.orbit_speed * time,
            steps: self.steps,
            dithering: !self.no_dither,
            shadow_softness: self.shadow_softness,
        }
    }
}

fn parse_positive(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 && v.is_finite() {
        Ok(v)
    } else {
        Err(format!("must be a positive finite number, got {v}"))
    }
}

fn parse_anisotropy(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if (-1.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("must lie in [-1, 1], got {v}"))
    }
}
