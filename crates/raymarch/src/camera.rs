//! Fixed look-at pinhole camera.

use glam::{Vec2, Vec3};

/// Look-at camera with a unit-zoom pinhole projection.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    /// Eye position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up vector.
    pub up: Vec3,
    /// Focal scale applied to the forward axis.
    pub zoom: f32,
}

impl Default for Camera {
    /// The stock pose: slightly above and behind the scene, looking at the
    /// middle of the floating box.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.5, -4.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Orthonormal basis `(forward, right, up)` derived from the pose.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = self.up.cross(forward).normalize();
        let up = forward.cross(right);
        (forward, right, up)
    }

    /// Normalized ray direction through `pixel` for a viewport of
    /// `resolution` pixels. Pixel coordinates follow the GL convention:
    /// origin at the bottom-left, y growing upward. The vertical axis sets
    /// the field of view, so aspect ratio is handled implicitly.
    #[must_use]
    pub fn ray_direction(&self, pixel: Vec2, resolution: Vec2) -> Vec3 {
        let uv = (pixel - 0.5 * resolution) / resolution.y;
        let (forward, right, up) = self.basis();
        (forward * self.zoom + right * uv.x + up * uv.y).normalize()
    }
}
