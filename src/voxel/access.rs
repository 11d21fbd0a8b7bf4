//! Read/write seams between the smoothing core and a voxel store

use crate::core::types::{IVec3, Result};
use super::voxel::Voxel;

/// Per-column data captured at extraction time and consumed at write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnData {
    /// Topmost solid voxel of the column, reused as fill when raising it.
    /// `None` when the column had no solid voxel inside the scanned region.
    pub surface: Option<Voxel>,
}

impl ColumnData {
    pub fn new(surface: Option<Voxel>) -> Self {
        Self { surface }
    }
}

/// Read-only voxel access
pub trait VoxelReader {
    /// Voxel at a block position (`Voxel::EMPTY` where nothing is stored)
    fn voxel(&self, pos: IVec3) -> Voxel;

    fn is_empty(&self, pos: IVec3) -> bool {
        self.voxel(pos).is_empty()
    }

    /// Column data for a surface voxel at `pos`
    fn column_data(&self, pos: IVec3) -> ColumnData {
        let voxel = self.voxel(pos);
        ColumnData::new((!voxel.is_empty()).then_some(voxel))
    }
}

/// Mutating voxel access.
///
/// Implementations may enforce a change budget and fail with
/// `Error::ResourceLimitExceeded` once it is spent.
pub trait VoxelWriter {
    fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> Result<()>;

    fn clear_voxel(&mut self, pos: IVec3) -> Result<()> {
        self.set_voxel(pos, Voxel::EMPTY)
    }
}

impl<T: VoxelReader + ?Sized> VoxelReader for &T {
    fn voxel(&self, pos: IVec3) -> Voxel {
        (**self).voxel(pos)
    }
}

impl<T: VoxelReader + ?Sized> VoxelReader for &mut T {
    fn voxel(&self, pos: IVec3) -> Voxel {
        (**self).voxel(pos)
    }
}

impl<T: VoxelWriter + ?Sized> VoxelWriter for &mut T {
    fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> Result<()> {
        (**self).set_voxel(pos, voxel)
    }

    fn clear_voxel(&mut self, pos: IVec3) -> Result<()> {
        (**self).clear_voxel(pos)
    }
}
