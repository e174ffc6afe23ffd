//! Error types for simulation setup.

use thiserror::Error;

/// Invalid simulation parameters, reported before any frame runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The five-point stencil needs at least one interior cell per axis.
    #[error("Grid must be at least 3x3 cells, got {nx}x{ny}")]
    GridTooSmall { nx: usize, ny: usize },

    #[error("Pool extents must be positive, got {lx} x {ly}")]
    NonPositiveExtent { lx: f64, ly: f64 },

    #[error("Wave speed must be positive, got {0}")]
    NonPositiveWaveSpeed(f64),

    #[error("Time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("Damping factor must lie strictly between 0 and 1, got {0}")]
    DampingFactorOutOfRange(f64),

    #[error("Render scale must be at least one pixel per cell")]
    ZeroRenderScale,
}
