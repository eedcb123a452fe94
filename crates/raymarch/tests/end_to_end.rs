use glam::Vec2;
use raymarch::{Raymarcher, RenderParams, Scene, Spotlight};

// The stock configuration from the interactive tool: density 2.5, g 0.6,
// light angle 1.5 rad, 64 dithered steps, shadow softness 16.
#[test]
fn stock_scene_center_pixel() {
    let marcher = Raymarcher::new();
    let params = RenderParams::default();
    let c = marcher.render_pixel(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0), &params);

    assert!(c.is_finite(), "c={c:?}");
    assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0, "c={c:?}");
    // Warm light color (1.0, 0.9, 0.7): red never falls below blue.
    assert!(c.x >= c.z, "c={c:?}");
}

#[test]
fn every_border_pixel_is_displayable() {
    let marcher = Raymarcher::new();
    let params = RenderParams::default();
    let res = Vec2::new(64.0, 48.0);
    for x in 0..64 {
        for &y in &[0.5_f32, 47.5] {
            #[allow(clippy::cast_precision_loss)]
            let p = Vec2::new(x as f32 + 0.5, y);
            let c = marcher.render_pixel(p, res, &params);
            assert!(c.is_finite(), "p={p:?} c={c:?}");
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }
}

#[test]
fn denser_medium_scatters_more() {
    let marcher = Raymarcher::new();
    let thin = RenderParams {
        density: 0.5,
        dithering: false,
        ..RenderParams::default()
    };
    let thick = RenderParams {
        density: 5.0,
        ..thin
    };
    // A sky pixel (upper image region) whose ray passes near the beam.
    let p = Vec2::new(400.0, 520.0);
    let res = Vec2::new(800.0, 600.0);
    let lo = marcher.render_pixel(p, res, &thin);
    let hi = marcher.render_pixel(p, res, &thick);
    assert!(
        hi.length() >= lo.length(),
        "thin={lo:?} thick={hi:?}"
    );
}

#[test]
fn plane_only_scene_still_renders() {
    let marcher = Raymarcher {
        scene: Scene::plane_only(),
        ..Raymarcher::new()
    };
    let params = RenderParams::default();
    let c = marcher.render_pixel(Vec2::new(100.5, 100.5), Vec2::new(320.0, 240.0), &params);
    assert!(c.is_finite());
    assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
}

#[test]
fn extreme_anisotropy_stays_finite() {
    let marcher = Raymarcher::new();
    for g in [-1.0, -0.99, 0.99, 1.0] {
        let params = RenderParams {
            scattering_g: g,
            ..RenderParams::default()
        };
        let c = marcher.render_pixel(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0), &params);
        assert!(c.is_finite(), "g={g} c={c:?}");
    }
}

#[test]
fn light_orbit_moves_the_beam() {
    // Sanity on the derived light: two opposite angles sit on opposite
    // sides of the scene.
    let a = Spotlight::orbiting(0.0);
    let b = Spotlight::orbiting(std::f32::consts::PI);
    assert!((a.position.z + b.position.z).abs() < 1e-5);
    assert!((a.position.z - 3.0).abs() < 1e-5);
}
