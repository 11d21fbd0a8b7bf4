//! Terrasmooth - Gaussian height-map smoothing for voxel terrain
//!
//! A [`SmoothBrush`](voxel::brush::SmoothBrush) reads the column heights
//! under a brush region, blurs them with a convolution kernel and writes the
//! result back as voxel columns.

pub mod core;
pub mod math;
pub mod voxel;
pub mod mask;
pub mod pattern;
pub mod convolution;
