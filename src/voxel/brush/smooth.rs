//! Gaussian smoothing brush

use glam::IVec3;

use crate::convolution::{HeightMap, HeightMapFilter, Kernel, WriteStats};
use crate::core::error::Error;
use crate::core::types::Result;
use crate::mask::ColumnMask;
use crate::math::BlockRegion;
use crate::pattern::Pattern;
use crate::voxel::access::{VoxelReader, VoxelWriter};
use super::config::SmoothBrushConfig;
use super::orientation::{Orientation, DEFAULT_REACH};

/// Largest footprint, in columns, a single application will extract
pub const MAX_REGION_COLUMNS: usize = 1 << 22;

/// A tool applied to a voxel world at a point
pub trait Brush {
    /// Apply once at `anchor`; `size` is the brush radius in blocks
    fn build<W>(&self, world: &mut W, anchor: IVec3, pattern: &dyn Pattern, size: f64) -> Result<BrushReport>
    where
        W: VoxelReader + VoxelWriter + ?Sized;
}

/// Outcome of one brush application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrushReport {
    pub region: BlockRegion,
    /// Columns in the region footprint
    pub columns: usize,
    /// Columns the mask let through
    pub included_columns: usize,
    pub stats: WriteStats,
}

/// Smooths terrain under the brush by blurring column heights.
///
/// Each application extracts the column heights of the brush region, runs
/// the kernel over them `iterations` times and raises or lowers every
/// included column to its rounded smoothed height.
pub struct SmoothBrush {
    iterations: usize,
    orientation: Orientation,
    reach: f64,
    mask: Option<Box<dyn ColumnMask>>,
    filter: HeightMapFilter,
}

impl SmoothBrush {
    /// Upward brush, no mask, Gaussian kernel of radius 5 and sigma 1
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            orientation: Orientation::Up,
            reach: DEFAULT_REACH,
            mask: None,
            filter: HeightMapFilter::new(Kernel::default()),
        }
    }

    pub fn from_config(config: &SmoothBrushConfig) -> Result<Self> {
        config.validate()?;
        let kernel = Kernel::gaussian(config.kernel_radius, config.sigma)?;
        Ok(Self {
            iterations: config.iterations,
            orientation: config.orientation,
            reach: config.reach,
            mask: None,
            filter: HeightMapFilter::new(kernel),
        })
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Only smooth columns the mask accepts
    pub fn with_mask(mut self, mask: impl ColumnMask + 'static) -> Self {
        self.mask = Some(Box::new(mask));
        self
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.filter = HeightMapFilter::new(kernel);
        self
    }

    pub fn with_reach(mut self, reach: f64) -> Self {
        self.reach = reach.max(0.0);
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn kernel(&self) -> &Kernel {
        self.filter.kernel()
    }

    /// Region an application at `anchor` with radius `size` covers
    pub fn region(&self, anchor: IVec3, size: f64) -> BlockRegion {
        self.orientation.region(anchor.as_dvec3(), size, self.reach)
    }
}

impl Brush for SmoothBrush {
    fn build<W>(&self, world: &mut W, anchor: IVec3, pattern: &dyn Pattern, size: f64) -> Result<BrushReport>
    where
        W: VoxelReader + VoxelWriter + ?Sized,
    {
        let region = self.region(anchor, size);
        let columns = region.column_count();
        if columns > MAX_REGION_COLUMNS {
            log::warn!("Refusing to smooth {} columns around {:?}", columns, anchor);
            return Err(Error::RegionTooLarge { columns, limit: MAX_REGION_COLUMNS });
        }
        log::debug!(
            "Smoothing {:?}..{:?} ({} columns, {}, {} iterations)",
            region.min, region.max, columns, self.orientation, self.iterations
        );

        let original = HeightMap::extract(&*world, &region, self.mask.as_deref());
        let included_columns = original.included_count();

        let stats = if included_columns == 0 {
            log::debug!("Every column masked out, nothing to smooth");
            WriteStats::default()
        } else {
            let smoothed = self.filter.apply(&original, self.iterations);
            original.write_back(world, &region, &smoothed, pattern)?
        };

        log::debug!(
            "Smoothed {} columns: {} raised (+{} voxels), {} lowered (-{} voxels)",
            included_columns, stats.columns_raised, stats.voxels_set,
            stats.columns_lowered, stats.voxels_cleared
        );

        Ok(BrushReport {
            region,
            columns,
            included_columns,
            stats,
        })
    }
}
