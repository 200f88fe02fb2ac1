//! wgpu renderer shared by the native and web shells.
//!
//! The shells own the surface and the event loop; everything between a
//! configured device and a presented frame lives here.

mod helpers;
mod renderer;

pub use helpers::{create_depth_texture, preferred_format, request_device, DEPTH_FORMAT};
pub use renderer::{pack_group, InstanceRaw, SceneRenderer, Uniforms};

pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
