//! Inclusive integer block region

use glam::I64Vec3;

use crate::core::types::{DVec3, IVec2, IVec3};

/// Axis-aligned cuboid of blocks, both corners inclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockRegion {
    pub min: IVec3,
    pub max: IVec3,
}

impl BlockRegion {
    /// Create region from two corners in any order
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create region from real-valued corners, flooring both into block space
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self::new(a.floor().as_ivec3(), b.floor().as_ivec3())
    }

    /// Single block region
    pub fn block(pos: IVec3) -> Self {
        Self { min: pos, max: pos }
    }

    /// Number of blocks along each axis.
    ///
    /// Widened to i64: a region spanning the whole i32 range is 2^32 blocks wide.
    pub fn size(&self) -> I64Vec3 {
        self.max.as_i64vec3() - self.min.as_i64vec3() + I64Vec3::ONE
    }

    /// Footprint extent along X
    pub fn width(&self) -> usize {
        self.size().x as usize
    }

    /// Footprint extent along Z
    pub fn length(&self) -> usize {
        self.size().z as usize
    }

    /// Vertical extent
    pub fn height(&self) -> usize {
        self.size().y as usize
    }

    /// Block count, saturating at `u64::MAX`
    pub fn volume(&self) -> u64 {
        let s = self.size();
        (s.x as u64).saturating_mul(s.y as u64).saturating_mul(s.z as u64)
    }

    /// Number of (x, z) columns in the footprint, saturating at `usize::MAX`
    pub fn column_count(&self) -> usize {
        self.width().saturating_mul(self.length())
    }

    /// Check if block is inside region
    pub fn contains(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if (x, z) column lies in the footprint
    pub fn contains_column(&self, column: IVec2) -> bool {
        column.x >= self.min.x && column.x <= self.max.x &&
        column.y >= self.min.z && column.y <= self.max.z
    }

    /// Row-major index of a column (x fastest), or None outside the footprint
    pub fn column_index(&self, column: IVec2) -> Option<usize> {
        if !self.contains_column(column) {
            return None;
        }
        let x = (column.x as i64 - self.min.x as i64) as usize;
        let z = (column.y as i64 - self.min.z as i64) as usize;
        Some(z * self.width() + x)
    }

    /// World (x, z) of the column at a row-major index
    pub fn column_at(&self, index: usize) -> IVec2 {
        let width = self.width();
        IVec2::new(
            self.min.x + (index % width) as i32,
            self.min.z + (index / width) as i32,
        )
    }

    /// Iterate footprint columns in row-major order, matching `column_index`
    pub fn columns(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.min.z..=self.max.z)
            .flat_map(move |z| (self.min.x..=self.max.x).map(move |x| IVec2::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let region = BlockRegion::new(IVec3::new(3, -1, 5), IVec3::new(-2, 4, 0));
        assert_eq!(region.min, IVec3::new(-2, -1, 0));
        assert_eq!(region.max, IVec3::new(3, 4, 5));
    }

    #[test]
    fn test_from_corners_floors_negative() {
        let region = BlockRegion::from_corners(
            DVec3::new(-0.5, -1.5, 0.5),
            DVec3::new(2.5, 3.0, 1.9),
        );
        assert_eq!(region.min, IVec3::new(-1, -2, 0));
        assert_eq!(region.max, IVec3::new(2, 3, 1));
    }

    #[test]
    fn test_size_and_volume() {
        let region = BlockRegion::new(IVec3::ZERO, IVec3::new(1, 2, 3));
        assert_eq!(region.size(), I64Vec3::new(2, 3, 4));
        assert_eq!(region.width(), 2);
        assert_eq!(region.length(), 4);
        assert_eq!(region.height(), 3);
        assert_eq!(region.volume(), 24);
        assert_eq!(region.column_count(), 8);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_full_range_extents_do_not_wrap() {
        let region = BlockRegion::new(IVec3::splat(i32::MIN), IVec3::splat(i32::MAX));
        assert_eq!(region.size(), I64Vec3::splat(1 << 32));
        assert_eq!(region.width(), 1 << 32);
        assert_eq!(region.column_count(), usize::MAX);
        assert_eq!(region.volume(), u64::MAX);
    }

    #[test]
    fn test_single_block() {
        let region = BlockRegion::block(IVec3::new(7, 7, 7));
        assert_eq!(region.volume(), 1);
        assert!(region.contains(IVec3::new(7, 7, 7)));
        assert!(!region.contains(IVec3::new(7, 8, 7)));
    }

    #[test]
    fn test_column_index_matches_iteration_order() {
        let region = BlockRegion::new(IVec3::new(-1, 0, 10), IVec3::new(2, 5, 12));
        for (i, column) in region.columns().enumerate() {
            assert_eq!(region.column_index(column), Some(i));
            assert_eq!(region.column_at(i), column);
        }
        assert_eq!(region.columns().count(), region.column_count());
        assert_eq!(region.column_index(IVec2::new(3, 10)), None);
    }
}
