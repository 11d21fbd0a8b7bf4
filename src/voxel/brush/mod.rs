//! Brushes that reshape voxel terrain around a point
//!
//! Currently a single Gaussian smoothing brush, configured once and applied
//! through the [`Brush`] trait.

pub mod orientation;
pub mod config;
pub mod smooth;

// Re-exports
pub use orientation::{Axis, Orientation, derive_region, DEFAULT_REACH};
pub use config::SmoothBrushConfig;
pub use smooth::{Brush, BrushReport, SmoothBrush, MAX_REGION_COLUMNS};
