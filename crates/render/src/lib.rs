#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! CPU frame executor for the raymarch kernel.
//!
//! Maps [`raymarch::Raymarcher::render_pixel`] over a pixel grid in parallel
//! and owns the resulting framebuffer, including 8-bit conversion and PNG
//! output. Pixels share no mutable state, so the grid is split by rows
//! across the rayon thread pool with no synchronization.

pub mod executor;
pub mod framebuffer;

pub use executor::render_frame;
pub use framebuffer::{Frame, RenderError};
