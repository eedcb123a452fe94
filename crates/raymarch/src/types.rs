/// Per-frame tunable inputs to the kernel.
///
/// The kernel assumes the ranges documented on each field; enforcing them is
/// the caller's job (the CLI validates before any frame is rendered). Out of
/// range values degrade the image but never panic or loop unboundedly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParams {
    /// Scattering density multiplier, `> 0`.
    pub density: f32,
    /// Henyey-Greenstein anisotropy in `[-1, 1]`; 0 is isotropic, positive
    /// values scatter forward.
    pub scattering_g: f32,
    /// Orbital angle of the spotlight around the scene origin, radians.
    pub light_angle: f32,
    /// Requested volumetric integration steps, `>= 1`. Hard-capped at
    /// [`crate::volume::MAX_VOLUME_STEPS`] regardless of the request.
    pub steps: u32,
    /// Jitter the integration start offset per pixel to decorrelate banding
    /// at low step counts.
    pub dithering: bool,
    /// Penumbra sharpness for the soft-shadow cone heuristic, `> 0`.
    /// Larger values give harder shadow edges.
    pub shadow_softness: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            density: 2.5,
            scattering_g: 0.6,
            light_angle: 1.5,
            steps: 64,
            dithering: true,
            shadow_softness: 16.0,
        }
    }
}
