//! Voxel data structures and operations

pub mod voxel;
pub mod access;
pub mod world;
pub mod edit;
pub mod brush;

pub use voxel::Voxel;
pub use access::{ColumnData, VoxelReader, VoxelWriter};
pub use world::VoxelWorld;
pub use edit::{EditDelta, EditOp, EditSession};
pub use brush::{Brush, Orientation, SmoothBrush, SmoothBrushConfig};
