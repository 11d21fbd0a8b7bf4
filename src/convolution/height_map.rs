//! Column height maps: extraction from and write-back into voxel columns

use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::mask::ColumnMask;
use crate::math::BlockRegion;
use crate::pattern::Pattern;
use crate::voxel::access::{ColumnData, VoxelReader, VoxelWriter};

/// Per-column heights over a region's (x, z) footprint.
///
/// Cells are row-major with x fastest. Excluded cells keep their height as a
/// read-only neighbor value; they are never smoothed or written back.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    width: usize,
    length: usize,
    heights: Vec<f64>,
    included: Vec<bool>,
    columns: Vec<ColumnData>,
}

/// Voxel operations issued by a write-back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub columns_raised: usize,
    pub columns_lowered: usize,
    pub voxels_set: usize,
    pub voxels_cleared: usize,
}

impl WriteStats {
    pub fn total_changes(&self) -> usize {
        self.voxels_set + self.voxels_cleared
    }
}

impl HeightMap {
    /// Scan each column of `region` top-down for its highest solid voxel.
    ///
    /// Columns with nothing solid get `region.min.y`. The mask is asked once
    /// per column; rejected columns are marked excluded.
    pub fn extract<R: VoxelReader + ?Sized>(
        world: &R,
        region: &BlockRegion,
        mask: Option<&dyn ColumnMask>,
    ) -> Self {
        let count = region.column_count();
        let mut heights = Vec::with_capacity(count);
        let mut included = Vec::with_capacity(count);
        let mut columns = Vec::with_capacity(count);

        for column in region.columns() {
            let surface = (region.min.y..=region.max.y)
                .rev()
                .map(|y| IVec3::new(column.x, y, column.y))
                .find(|&pos| !world.is_empty(pos));

            match surface {
                Some(pos) => {
                    heights.push(pos.y as f64);
                    columns.push(world.column_data(pos));
                }
                None => {
                    heights.push(region.min.y as f64);
                    columns.push(ColumnData::default());
                }
            }
            included.push(mask.map_or(true, |m| m.test(column)));
        }

        Self {
            width: region.width(),
            length: region.length(),
            heights,
            included,
            columns,
        }
    }

    /// Height map from raw values, every column included and without column data
    pub fn from_heights(width: usize, length: usize, heights: Vec<f64>) -> Result<Self> {
        if width == 0 || length == 0 {
            return Err(Error::HeightMap(format!("empty footprint {}x{}", width, length)));
        }
        if heights.len() != width * length {
            return Err(Error::HeightMap(format!(
                "{} heights for a {}x{} footprint",
                heights.len(), width, length
            )));
        }
        Ok(Self {
            width,
            length,
            included: vec![true; heights.len()],
            columns: vec![ColumnData::default(); heights.len()],
            heights,
        })
    }

    /// Include or exclude the cell at (x, z)
    pub fn set_included(&mut self, x: usize, z: usize, included: bool) {
        let index = self.index(x, z);
        self.included[index] = included;
    }

    /// Same map with a new height buffer
    pub(crate) fn with_heights(mut self, heights: Vec<f64>) -> Self {
        debug_assert_eq!(heights.len(), self.heights.len());
        self.heights = heights;
        self
    }

    #[inline]
    fn index(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn included(&self) -> &[bool] {
        &self.included
    }

    pub fn height(&self, x: usize, z: usize) -> f64 {
        self.heights[self.index(x, z)]
    }

    pub fn is_included(&self, x: usize, z: usize) -> bool {
        self.included[self.index(x, z)]
    }

    pub fn column(&self, x: usize, z: usize) -> &ColumnData {
        &self.columns[self.index(x, z)]
    }

    pub fn included_count(&self) -> usize {
        self.included.iter().filter(|&&i| i).count()
    }

    /// Move each included column of `region` from this map's heights to `smoothed`'s.
    ///
    /// Smoothed heights round half up and are clamped to the region's vertical
    /// range. Raised columns are filled bottom-up with their captured surface
    /// voxel, or `pattern` where the column had none; lowered columns are
    /// cleared top-down. Any writer error aborts the remaining columns.
    pub fn write_back<W: VoxelWriter + ?Sized>(
        &self,
        world: &mut W,
        region: &BlockRegion,
        smoothed: &HeightMap,
        pattern: &dyn Pattern,
    ) -> Result<WriteStats> {
        if smoothed.width != self.width || smoothed.length != self.length {
            return Err(Error::HeightMap(format!(
                "smoothed map is {}x{}, original is {}x{}",
                smoothed.width, smoothed.length, self.width, self.length
            )));
        }
        if region.width() != self.width || region.length() != self.length {
            return Err(Error::HeightMap(format!(
                "region footprint {}x{} does not match map {}x{}",
                region.width(), region.length(), self.width, self.length
            )));
        }

        let mut stats = WriteStats::default();

        for index in 0..self.heights.len() {
            if !self.included[index] {
                continue;
            }

            let old = self.heights[index].round() as i32;
            let new = ((smoothed.heights[index] + 0.5).floor() as i32)
                .clamp(region.min.y, region.max.y);
            let column = region.column_at(index);

            if new > old {
                let surface = self.columns[index].surface;
                for y in (old + 1)..=new {
                    let pos = IVec3::new(column.x, y, column.y);
                    let fill = surface.unwrap_or_else(|| pattern.resolve(pos));
                    world.set_voxel(pos, fill)?;
                }
                stats.columns_raised += 1;
                stats.voxels_set += (new - old) as usize;
            } else if new < old {
                for y in ((new + 1)..=old).rev() {
                    world.clear_voxel(IVec3::new(column.x, y, column.y))?;
                }
                stats.columns_lowered += 1;
                stats.voxels_cleared += (old - new) as usize;
            }
        }

        Ok(stats)
    }
}
