//! Top-level per-pixel operation: surface pass, volumetric pass, compositing
//! and tone mapping.

use crate::camera::Camera;
use crate::light::Spotlight;
use crate::march::{ray_march, soft_shadow, MAX_TRACE_DISTANCE};
use crate::scene::Scene;
use crate::types::RenderParams;
use crate::volume::{scatter, VOLUME_FALLBACK_DISTANCE};
use glam::{Vec2, Vec3};

/// Ambient floor of the surface shading.
pub const AMBIENT: f32 = 0.1;
/// Diffuse weight of the surface shading.
pub const DIFFUSE: f32 = 0.5;
/// Display gamma.
pub const GAMMA: f32 = 2.2;

/// Static render configuration: the scene geometry and the camera pose.
/// Everything that varies per frame arrives through [`RenderParams`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Raymarcher {
    pub scene: Scene,
    pub camera: Camera,
}

impl Raymarcher {
    /// Raymarcher over the stock scene and camera.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tone-mapped RGB color for one pixel.
    ///
    /// `pixel` is a GL-style fragment coordinate (origin bottom-left,
    /// sample at the pixel center); `resolution` the viewport size in
    /// pixels. Pure: identical arguments give bit-identical results, so
    /// callers may evaluate pixels in any order or in parallel.
    #[must_use]
    pub fn render_pixel(&self, pixel: Vec2, resolution: Vec2, params: &RenderParams) -> Vec3 {
        let origin = self.camera.eye;
        let dir = self.camera.ray_direction(pixel, resolution);
        let light = Spotlight::orbiting(params.light_angle);

        let t = ray_march(&self.scene, origin, dir);
        let hit = t < MAX_TRACE_DISTANCE;

        let mut color = if hit {
            shade_surface(
                &self.scene,
                &light,
                origin + dir * t,
                params.shadow_softness,
            )
        } else {
            Vec3::ZERO
        };

        // The volume pass stops at the surface, or at a fixed depth when
        // the ray escapes.
        let max_vol_dist = if hit { t } else { VOLUME_FALLBACK_DISTANCE };
        color += scatter(
            &self.scene,
            &light,
            origin,
            dir,
            max_vol_dist,
            pixel,
            params,
        );

        tonemap(color)
    }
}

/// Lambertian surface color at hit point `p`: ambient floor plus shadowed
/// diffuse lighting. No specular, no texturing.
#[must_use]
pub fn shade_surface(scene: &Scene, light: &Spotlight, p: Vec3, shadow_softness: f32) -> Vec3 {
    let n = scene.normal(p);
    let l = (light.position - p).normalize_or_zero();
    let diffuse = n.dot(l).max(0.0);
    let shadow = soft_shadow(scene, p, light.position, shadow_softness);
    Vec3::splat(AMBIENT) + Vec3::splat(DIFFUSE) * diffuse * shadow * light.color
}

/// Reinhard tone map plus gamma correction, clamped into `[0, 1]` per
/// channel so the result is always displayable.
#[must_use]
pub fn tonemap(c: Vec3) -> Vec3 {
    let compressed = c / (c + Vec3::ONE);
    compressed.powf(1.0 / GAMMA).clamp(Vec3::ZERO, Vec3::ONE)
}
