//! Sparse in-memory voxel world

use std::collections::HashMap;

use crate::core::types::{IVec2, IVec3, Result};
use crate::math::BlockRegion;
use super::access::{VoxelReader, VoxelWriter};
use super::voxel::Voxel;

/// Hash map of solid voxels; anything not stored is air
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    voxels: HashMap<IVec3, Voxel>,
}

impl VoxelWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            voxels: HashMap::new(),
        }
    }

    /// Get voxel at position
    pub fn get(&self, pos: IVec3) -> Voxel {
        self.voxels.get(&pos).copied().unwrap_or(Voxel::EMPTY)
    }

    /// Set voxel at position; empty voxels are removed from storage
    pub fn set(&mut self, pos: IVec3, voxel: Voxel) {
        if voxel.is_empty() {
            self.voxels.remove(&pos);
        } else {
            self.voxels.insert(pos, voxel);
        }
    }

    /// Fill every block of a region
    pub fn fill(&mut self, region: &BlockRegion, voxel: Voxel) {
        for y in region.min.y..=region.max.y {
            for column in region.columns() {
                self.set(IVec3::new(column.x, y, column.y), voxel);
            }
        }
    }

    /// Fill one column from `bottom` up to `top`, both inclusive
    pub fn fill_column(&mut self, column: IVec2, bottom: i32, top: i32, voxel: Voxel) {
        for y in bottom..=top {
            self.set(IVec3::new(column.x, y, column.y), voxel);
        }
    }

    /// Topmost solid y of a column within `[min_y, max_y]`
    pub fn column_height(&self, column: IVec2, min_y: i32, max_y: i32) -> Option<i32> {
        (min_y..=max_y)
            .rev()
            .find(|&y| !self.get(IVec3::new(column.x, y, column.y)).is_empty())
    }

    /// Number of solid voxels stored
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }
}

impl VoxelReader for VoxelWorld {
    fn voxel(&self, pos: IVec3) -> Voxel {
        self.get(pos)
    }
}

impl VoxelWriter for VoxelWorld {
    fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> Result<()> {
        self.set(pos, voxel);
        Ok(())
    }
}
