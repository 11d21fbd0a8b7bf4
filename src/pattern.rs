//! Fill patterns for voxels a brush creates

use crate::core::types::IVec3;
use crate::voxel::voxel::Voxel;

/// Source of fill content for newly added voxels
pub trait Pattern {
    fn resolve(&self, pos: IVec3) -> Voxel;
}

impl<F> Pattern for F
where
    F: Fn(IVec3) -> Voxel,
{
    fn resolve(&self, pos: IVec3) -> Voxel {
        self(pos)
    }
}

/// Same voxel everywhere
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPattern(pub Voxel);

impl Pattern for BlockPattern {
    fn resolve(&self, _pos: IVec3) -> Voxel {
        self.0
    }
}

/// Weighted choice between voxels, deterministic per position
#[derive(Clone, Debug, Default)]
pub struct RandomPattern {
    entries: Vec<(Voxel, f64)>,
    total_weight: f64,
    seed: u32,
}

/// Deterministic 3D hash
fn hash_3d(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    let mut h = seed;
    for v in [x, y, z] {
        h ^= v as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
    }
    h
}

impl RandomPattern {
    pub fn new(seed: u32) -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0.0,
            seed,
        }
    }

    /// Add a voxel with relative weight; non-positive weights are ignored
    pub fn with(mut self, voxel: Voxel, weight: f64) -> Self {
        if weight > 0.0 && weight.is_finite() {
            self.entries.push((voxel, weight));
            self.total_weight += weight;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Pattern for RandomPattern {
    fn resolve(&self, pos: IVec3) -> Voxel {
        let hash = hash_3d(pos.x, pos.y, pos.z, self.seed);
        let mut pick = (hash & 0xFFFF) as f64 / 65536.0 * self.total_weight;
        for (voxel, weight) in &self.entries {
            if pick < *weight {
                return *voxel;
            }
            pick -= weight;
        }
        // Float slack lands on the last entry
        self.entries.last().map_or(Voxel::EMPTY, |(voxel, _)| *voxel)
    }
}
