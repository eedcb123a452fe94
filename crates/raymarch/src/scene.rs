//! Signed-distance scene: a box floating above a ground plane.
//!
//! Both primitives are optional so reduced scenes (box only, plane only,
//! empty) can be built for boundary tests. `distance` is the hot path of the
//! whole kernel; it runs once per march step, per shadow step and six times
//! per normal estimate, so it stays branch-light and allocation-free.

use glam::Vec3;

/// Epsilon for central-difference normal estimation.
pub const NORMAL_EPSILON: f32 = 0.001;

/// Axis-aligned box described by its center and half-extents.
#[derive(Copy, Clone, Debug)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxShape {
    #[must_use]
    pub const fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }
}

/// Infinite horizontal plane at a fixed height.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub height: f32,
}

impl Plane {
    #[must_use]
    pub const fn new(height: f32) -> Self {
        Self { height }
    }
}

/// Signed distance from `p` to an axis-aligned box centered at `center`.
#[must_use]
pub fn sd_box(p: Vec3, center: Vec3, half_extents: Vec3) -> f32 {
    let q = (p - center).abs() - half_extents;
    let outside = q.max(Vec3::ZERO).length();
    let inside = q.x.max(q.y.max(q.z)).min(0.0);
    outside + inside
}

/// Signed distance from `p` to a horizontal plane at `height`.
#[must_use]
pub fn sd_plane(p: Vec3, height: f32) -> f32 {
    p.y - height
}

/// Static scene geometry.
#[derive(Copy, Clone, Debug)]
pub struct Scene {
    pub slab: Option<BoxShape>,
    pub floor: Option<Plane>,
}

impl Default for Scene {
    /// The stock scene: a 1.6 x 2.4 x 1.0 box floating at (0, 1, 0) over a
    /// ground plane at y = 0.
    fn default() -> Self {
        Self {
            slab: Some(BoxShape::new(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.8, 1.2, 0.5),
            )),
            floor: Some(Plane::new(0.0)),
        }
    }
}

impl Scene {
    /// Scene with only the box primitive.
    #[must_use]
    pub fn box_only() -> Self {
        Self {
            floor: None,
            ..Self::default()
        }
    }

    /// Scene with only the ground plane.
    #[must_use]
    pub fn plane_only() -> Self {
        Self {
            slab: None,
            ..Self::default()
        }
    }

    /// Signed distance from `p` to the nearest scene surface. Negative
    /// inside geometry; `f32::INFINITY` for an empty scene.
    #[must_use]
    pub fn distance(&self, p: Vec3) -> f32 {
        let mut d = f32::INFINITY;
        if let Some(slab) = self.slab {
            d = d.min(sd_box(p, slab.center, slab.half_extents));
        }
        if let Some(floor) = self.floor {
            d = d.min(sd_plane(p, floor.height));
        }
        d
    }

    /// Surface normal at `p`, estimated by central differences of the
    /// distance field (six extra evaluations).
    #[must_use]
    pub fn normal(&self, p: Vec3) -> Vec3 {
        let e = NORMAL_EPSILON;
        let ex = Vec3::new(e, 0.0, 0.0);
        let ey = Vec3::new(0.0, e, 0.0);
        let ez = Vec3::new(0.0, 0.0, e);
        Vec3::new(
            self.distance(p + ex) - self.distance(p - ex),
            self.distance(p + ey) - self.distance(p - ey),
            self.distance(p + ez) - self.distance(p - ez),
        )
        .normalize_or_zero()
    }
}
