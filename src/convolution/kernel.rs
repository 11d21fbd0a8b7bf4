//! Convolution kernels

use crate::core::error::Error;
use crate::core::types::Result;

/// Kernel radius used by the smoothing brush
pub const DEFAULT_KERNEL_RADIUS: usize = 5;
/// Gaussian standard deviation used by the smoothing brush
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Rectangular matrix of weights with a center offset.
///
/// Weights are row-major (x fastest). `offset_x`/`offset_z` is the cell
/// aligned with the sample being filtered.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    offset_x: usize,
    offset_z: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Kernel from raw weights, centered. Weights must be finite and non-negative.
    pub fn new(width: usize, height: usize, weights: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidKernel(format!("empty kernel {}x{}", width, height)));
        }
        if weights.len() != width * height {
            return Err(Error::InvalidKernel(format!(
                "{} weights for a {}x{} kernel",
                weights.len(), width, height
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidKernel(format!("bad weight {}", w)));
        }

        Ok(Self {
            width,
            height,
            offset_x: width / 2,
            offset_z: height / 2,
            weights,
        })
    }

    /// Normalized Gaussian kernel of side `2 * radius + 1`
    pub fn gaussian(radius: usize, sigma: f64) -> Result<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidKernel(format!("sigma must be positive, got {}", sigma)));
        }
        Ok(Self::gaussian_unchecked(radius, sigma))
    }

    fn gaussian_unchecked(radius: usize, sigma: f64) -> Self {
        let side = radius * 2 + 1;
        let r = radius as isize;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(side * side);
        for dz in -r..=r {
            for dx in -r..=r {
                let dist_sq = (dx * dx + dz * dz) as f64;
                weights.push((-dist_sq / two_sigma_sq).exp());
            }
        }
        normalize(&mut weights);

        Self {
            width: side,
            height: side,
            offset_x: radius,
            offset_z: radius,
            weights,
        }
    }

    /// Box kernel: every cell weighs `1 / (2r + 1)²`
    pub fn linear(radius: usize) -> Self {
        let side = radius * 2 + 1;
        let cells = side * side;
        Self {
            width: side,
            height: side,
            offset_x: radius,
            offset_z: radius,
            weights: vec![1.0 / cells as f64; cells],
        }
    }

    /// 1x1 kernel that leaves input untouched
    pub fn identity() -> Self {
        Self {
            width: 1,
            height: 1,
            offset_x: 0,
            offset_z: 0,
            weights: vec![1.0],
        }
    }

    /// Rescale weights so they sum to 1; a zero-sum kernel is left as is
    pub fn normalized(mut self) -> Self {
        normalize(&mut self.weights);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Center cell (x, z)
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_z)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at kernel cell (kx, kz)
    #[inline]
    pub fn weight(&self, kx: usize, kz: usize) -> f64 {
        self.weights[kz * self.width + kx]
    }

    /// Weight at a signed offset from the center, None outside the kernel
    pub fn weight_at(&self, dx: isize, dz: isize) -> Option<f64> {
        let kx = self.offset_x as isize + dx;
        let kz = self.offset_z as isize + dz;
        if kx < 0 || kz < 0 || kx >= self.width as isize || kz >= self.height as isize {
            return None;
        }
        Some(self.weight(kx as usize, kz as usize))
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl Default for Kernel {
    /// The smoothing brush kernel: Gaussian, radius 5, sigma 1
    fn default() -> Self {
        Self::gaussian_unchecked(DEFAULT_KERNEL_RADIUS, DEFAULT_SIGMA)
    }
}

fn normalize(weights: &mut [f64]) {
    let sum: f64 = weights.iter().sum();
    if sum > 0.0 {
        for w in weights.iter_mut() {
            *w /= sum;
        }
    }
}
