//! Sphere tracing: surface intersection and cone-based soft shadows.
//!
//! Both loops carry hard iteration caps independent of their inputs, so a
//! single evaluation always finishes in bounded time no matter how the
//! distance field behaves.

use crate::scene::Scene;
use glam::Vec3;

/// Distance below which a march step counts as a surface hit.
pub const HIT_EPSILON: f32 = 0.001;
/// Rays are abandoned as misses past this distance.
pub const MAX_TRACE_DISTANCE: f32 = 20.0;
/// Iteration cap for the surface march.
pub const MAX_MARCH_STEPS: u32 = 100;
/// Iteration cap for the shadow march.
pub const SHADOW_STEPS: u32 = 30;
/// Start offset of the shadow march, avoids self-intersection at the
/// shading point.
pub const SHADOW_BIAS: f32 = 0.1;

/// Marches from `origin` along `dir` (normalized) and returns the traveled
/// distance `t`. Compare against [`MAX_TRACE_DISTANCE`] to classify:
/// `t < MAX_TRACE_DISTANCE` is a hit, anything else a miss.
#[must_use]
pub fn ray_march(scene: &Scene, origin: Vec3, dir: Vec3) -> f32 {
    let mut t = 0.0;
    for _ in 0..MAX_MARCH_STEPS {
        let d = scene.distance(origin + dir * t);
        if d < HIT_EPSILON {
            break;
        }
        t += d;
        if t > MAX_TRACE_DISTANCE {
            break;
        }
    }
    t
}

/// Soft shadow factor in `[0, 1]` for `point` lit from `light_pos`.
///
/// Marches toward the light from a [`SHADOW_BIAS`] offset, tracking the
/// running minimum of `softness * h / t` (the cone heuristic: how close the
/// shadow ray grazes geometry relative to how far it has traveled). Returns
/// exactly `0.0` the moment the ray enters geometry. Larger `softness`
/// sharpens the penumbra. Heuristic, not a physical penumbra.
#[must_use]
pub fn soft_shadow(scene: &Scene, point: Vec3, light_pos: Vec3, softness: f32) -> f32 {
    let to_light = light_pos - point;
    let dist_to_light = to_light.length();
    let l = to_light / dist_to_light.max(HIT_EPSILON);

    let mut t = SHADOW_BIAS;
    let mut res = 1.0_f32;
    for _ in 0..SHADOW_STEPS {
        let h = scene.distance(point + l * t);
        if h < HIT_EPSILON {
            return 0.0;
        }
        res = res.min(softness * h / t);
        t += h;
        if t > dist_to_light {
            break;
        }
    }
    res.clamp(0.0, 1.0)
}
