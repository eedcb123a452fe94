//! Orbiting spotlight.

use glam::Vec3;

/// Orbit radius on the XZ plane.
pub const ORBIT_RADIUS: f32 = 3.0;
/// Fixed light height above the ground.
pub const ORBIT_HEIGHT: f32 = 4.0;
/// Cosine of the spotlight cutoff angle.
pub const SPOT_COS_CUTOFF: f32 = 0.9;
/// Width of the smoothed band at the cone edge.
pub const SPOT_EDGE_BAND: f32 = 0.05;

/// Spotlight aimed at the scene origin.
#[derive(Copy, Clone, Debug)]
pub struct Spotlight {
    pub position: Vec3,
    /// Normalized aim direction.
    pub direction: Vec3,
    /// Color premultiplied by intensity.
    pub color: Vec3,
    pub cos_cutoff: f32,
    pub edge: f32,
}

impl Spotlight {
    /// Light at orbital angle `angle` (radians), radius [`ORBIT_RADIUS`] on
    /// the XZ plane at height [`ORBIT_HEIGHT`], pointed at the origin. The
    /// warm color bias (more red than blue) is part of the stock look.
    #[must_use]
    pub fn orbiting(angle: f32) -> Self {
        let position = Vec3::new(
            angle.sin() * ORBIT_RADIUS,
            ORBIT_HEIGHT,
            angle.cos() * ORBIT_RADIUS,
        );
        Self {
            position,
            direction: (-position).normalize(),
            color: Vec3::new(1.0, 0.9, 0.7) * 2.0,
            cos_cutoff: SPOT_COS_CUTOFF,
            edge: SPOT_EDGE_BAND,
        }
    }

    /// Cone falloff for a point seen from the light along `-to_light_dir`.
    /// Zero outside the cone, ramping smoothly to one across the edge band.
    #[must_use]
    pub fn cone_intensity(&self, to_light_dir: Vec3) -> f32 {
        let alignment = (-to_light_dir).dot(self.direction);
        if alignment <= self.cos_cutoff {
            0.0
        } else {
            smoothstep(self.cos_cutoff, self.cos_cutoff + self.edge, alignment)
        }
    }
}

/// Hermite interpolation between two edges, clamped outside them.
#[must_use]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
