//! Iterated kernel convolution over height maps

use rayon::prelude::*;

use super::height_map::HeightMap;
use super::kernel::Kernel;

/// Smooths height maps by repeated convolution with a kernel.
///
/// Neighbors past the map edge are clamped to the nearest edge cell. Excluded
/// cells are copied through unchanged but still feed their neighbors.
#[derive(Clone, Debug, Default)]
pub struct HeightMapFilter {
    kernel: Kernel,
}

impl HeightMapFilter {
    pub fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// One convolution pass into a fresh buffer.
    ///
    /// Rows are filtered in parallel. Every cell reads only `heights`, so the
    /// result is identical to a sequential pass.
    pub fn filter(&self, heights: &[f64], included: &[bool], width: usize, length: usize) -> Vec<f64> {
        debug_assert_eq!(heights.len(), width * length);
        debug_assert_eq!(included.len(), heights.len());

        let mut out = vec![0.0; heights.len()];
        if out.is_empty() {
            return out;
        }

        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(z, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let index = z * width + x;
                    *cell = if included[index] {
                        self.convolve_at(heights, width, length, x, z)
                    } else {
                        heights[index]
                    };
                }
            });

        out
    }

    fn convolve_at(&self, heights: &[f64], width: usize, length: usize, x: usize, z: usize) -> f64 {
        let (offset_x, offset_z) = self.kernel.offset();
        let max_x = width as isize - 1;
        let max_z = length as isize - 1;

        let mut sum = 0.0;
        for kz in 0..self.kernel.height() {
            let sz = (z as isize + kz as isize - offset_z as isize).clamp(0, max_z) as usize;
            let row = sz * width;
            for kx in 0..self.kernel.width() {
                let sx = (x as isize + kx as isize - offset_x as isize).clamp(0, max_x) as usize;
                sum += self.kernel.weight(kx, kz) * heights[row + sx];
            }
        }
        sum
    }

    /// Run `iterations` passes, each reading only the previous pass's output
    pub fn apply(&self, initial: &HeightMap, iterations: usize) -> HeightMap {
        let (width, length) = (initial.width(), initial.length());
        let mut current = initial.clone();

        for pass in 0..iterations {
            let next = self.filter(current.heights(), current.included(), width, length);
            current = current.with_heights(next);
            log::trace!("Convolution pass {}/{} over {}x{} columns", pass + 1, iterations, width, length);
        }

        current
    }
}
