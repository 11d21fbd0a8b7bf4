//! Height map convolution: kernels, extraction, filtering and write-back.
//!
//! A smoothing run extracts a [`HeightMap`] from a voxel region, runs a
//! [`HeightMapFilter`] over it for some number of passes, then writes the
//! difference back column by column.

pub mod kernel;
pub mod height_map;
pub mod filter;

pub use kernel::{Kernel, DEFAULT_KERNEL_RADIUS, DEFAULT_SIGMA};
pub use height_map::{HeightMap, WriteStats};
pub use filter::HeightMapFilter;
