// Per-frame gating; kept free of web-sys so host tests can include it.

/// What the animation loop does with one browser frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// No GPU yet: the scene is left untouched.
    Skip,
    /// Advance the scene and draw, reconfiguring the surface first if asked.
    Draw { resize: Option<(u32, u32)> },
}

/// Decide the frame from the configured surface size (`None` while the GPU
/// is unavailable) and the canvas backing size.
///
/// A zero-sized canvas keeps the last surface configuration.
pub fn plan_frame(surface: Option<(u32, u32)>, canvas: (u32, u32)) -> FrameStep {
    let Some(current) = surface else {
        return FrameStep::Skip;
    };
    let resize = (canvas != current && canvas.0 > 0 && canvas.1 > 0).then_some(canvas);
    FrameStep::Draw { resize }
}
