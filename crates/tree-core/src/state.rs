//! Morph state and camera shared with the frontends.
//!
//! These types avoid platform-specific APIs so both the native and the web
//! shells can drive them. The shells own a single [`MorphState`] (inside the
//! scene), flip it on user input and read the texts below for their overlay.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION};
use glam::{Mat4, Vec3};

pub const TITLE_LINES: [&str; 2] = ["MERRY", "CHRISTMAS"];
pub const SUBTITLE: &str = "Interactive Holiday Experience";

/// Which target layout the particles are heading for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MorphState {
    #[default]
    Scattered,
    Assembled,
}

impl MorphState {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MorphState::Scattered => MorphState::Assembled,
            MorphState::Assembled => MorphState::Scattered,
        }
    }

    #[inline]
    pub fn is_assembled(self) -> bool {
        self == MorphState::Assembled
    }

    /// Short status line shown in the centre of the overlay.
    pub fn status_label(self) -> &'static str {
        match self {
            MorphState::Scattered => "AWAITING SPIRIT",
            MorphState::Assembled => "MAGIC ASSEMBLED",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            MorphState::Scattered => "The magic is scattered. Gather the joy.",
            MorphState::Assembled => "Let the festive spirit fill the air.",
        }
    }

    /// Label for the control that performs the next toggle.
    pub fn action_label(self) -> &'static str {
        match self {
            MorphState::Scattered => "Gather Tree",
            MorphState::Assembled => "Release Magic",
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera for a surface of the given pixel size.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
