pub mod animation;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod layout;
pub mod mesh;
pub mod particle;
pub mod scene;
pub mod state;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use particle::*;
pub use scene::*;
pub use state::*;
