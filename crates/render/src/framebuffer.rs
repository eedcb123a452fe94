//! Linear-RGB framebuffer and PNG output.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Row-major grid of display-ready RGB pixels, row 0 at the top of the
/// image. Channel values are in `[0, 1]`; the kernel tone-maps before
/// anything lands here.
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
}

impl Frame {
    /// Black frame of the given size.
    ///
    /// # Errors
    /// Returns [`RenderError::EmptyFrame`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFrame { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![[0.0; 3]; (width as usize) * (height as usize)],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[[f32; 3]] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.pixels
    }

    /// Pixel at image coordinates (`x` right, `y` down from the top-left).
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Packed RGBA8 bytes, alpha forced opaque.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        let quantized: Vec<[u8; 4]> = self
            .pixels
            .iter()
            .map(|&[r, g, b]| [quantize(r), quantize(g), quantize(b), 0xFF])
            .collect();
        bytemuck::cast_slice(&quantized).to_vec()
    }

    /// Writes the frame as a PNG file.
    ///
    /// # Errors
    /// Propagates image encoding and filesystem failures.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.to_rgba8();
        image::save_buffer(
            path,
            &bytes,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

fn quantize(channel: f32) -> u8 {
    // Kernel output is already clamped; the clamp here guards hand-built
    // frames from tests or future writers.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let q = (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
    q
}
