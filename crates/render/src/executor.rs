//! Parallel evaluation of the kernel over the pixel grid.

use crate::framebuffer::{Frame, RenderError};
use glam::Vec2;
use rayon::prelude::*;
use raymarch::{Raymarcher, RenderParams};
use std::time::Instant;

/// Renders one frame by evaluating the kernel at every pixel center.
///
/// Rows are distributed across the rayon pool; every pixel is an independent
/// pure evaluation, so the output is identical whatever the row schedule.
/// Image rows run top-down while the kernel keeps the GL convention (y up),
/// so the vertical coordinate is flipped here.
///
/// # Errors
/// Returns [`RenderError::EmptyFrame`] when either dimension is zero.
pub fn render_frame(
    marcher: &Raymarcher,
    width: u32,
    height: u32,
    params: &RenderParams,
) -> Result<Frame, RenderError> {
    let mut frame = Frame::new(width, height)?;
    #[allow(clippy::cast_precision_loss)]
    let resolution = Vec2::new(width as f32, height as f32);

    let started = Instant::now();
    frame
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, out)| {
            #[allow(clippy::cast_precision_loss)]
            let frag_y = resolution.y - (row as f32 + 0.5);
            for (x, px) in out.iter_mut().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let frag = Vec2::new(x as f32 + 0.5, frag_y);
                let rgb = marcher.render_pixel(frag, resolution, params);
                *px = rgb.to_array();
            }
        });
    tracing::debug!(
        width,
        height,
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "frame rendered"
    );

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_matches_requested_dimensions() {
        let marcher = Raymarcher::new();
        let frame = render_frame(&marcher, 16, 9, &RenderParams::default()).unwrap();
        assert_eq!(frame.width(), 16);
        assert_eq!(frame.height(), 9);
        assert_eq!(frame.pixels().len(), 16 * 9);
    }

    #[test]
    fn zero_size_is_an_error() {
        let marcher = Raymarcher::new();
        assert!(render_frame(&marcher, 0, 9, &RenderParams::default()).is_err());
    }
}
