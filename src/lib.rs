//! Pool ripple simulator
//!
//! Leapfrog finite-difference wave solver with absorbing edges, live pointer
//! disturbances and a false-color wgpu renderer.

pub mod config;
pub mod error;
pub mod gpu;
pub mod render;
pub mod simulation;
