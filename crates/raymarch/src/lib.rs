#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Volumetric Raymarch Kernel
//!
//! Pure per-pixel rendering kernel for a raymarched scene with volumetric
//! spotlight scattering. Given a pixel coordinate, a viewport resolution and
//! a set of [`RenderParams`], the kernel produces one tone-mapped RGB color
//! by (a) sphere tracing a signed-distance scene for direct surface shading
//! and (b) integrating Henyey-Greenstein in-scattering along the camera ray.
//!
//! ## Key Components
//!
//! -   **Scene:** A signed-distance field built from a floating box and a
//!     ground plane, defined in the [`scene`] module. Primitives are
//!     optional so reduced scenes can be constructed for testing.
//! -   **Marching:** Surface intersection and cone-based soft shadows live
//!     in the [`march`] module. Every loop carries a hard iteration cap, so
//!     a pixel always finishes in bounded time.
//! -   **Volume:** The [`volume`] module holds the Henyey-Greenstein phase
//!     function, the interleaved-gradient-noise jitter and the scattering
//!     integrator.
//! -   **Raymarcher:** The [`Raymarcher`] struct in the [`pixel`] module
//!     composes camera, scene and light into the top-level
//!     [`Raymarcher::render_pixel`] operation.
//!
//! The kernel is a total function over its inputs: no allocation, no I/O,
//! no interior mutability. Identical arguments always produce bit-identical
//! output, which is what makes the per-pixel map embarrassingly parallel
//! for the frame executor sitting above this crate.
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec2;
//! use raymarch::{Raymarcher, RenderParams};
//!
//! let marcher = Raymarcher::new();
//! let params = RenderParams::default();
//! let rgb = marcher.render_pixel(
//!     Vec2::new(400.0, 300.0),
//!     Vec2::new(800.0, 600.0),
//!     &params,
//! );
//! assert!(rgb.is_finite());
//! ```

pub mod camera;
pub mod light;
pub mod march;
pub mod pixel;
pub mod scene;
pub mod types;
pub mod volume;

pub use camera::Camera;
pub use light::Spotlight;
pub use march::{ray_march, soft_shadow, HIT_EPSILON, MAX_TRACE_DISTANCE};
pub use pixel::Raymarcher;
pub use scene::{BoxShape, Plane, Scene};
pub use types::RenderParams;
pub use volume::{interleaved_gradient_noise, phase_hg, MAX_VOLUME_STEPS};
