//! Error types for scene construction and GPU setup.

use thiserror::Error;

/// Rejected layout or scene parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("height window [{min}, {max}] must satisfy 0 <= min <= max <= 1")]
    InvalidHeightWindow { min: f32, max: f32 },
}

/// Failures while bringing up the GPU renderer.
#[cfg(feature = "gpu")]
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}
