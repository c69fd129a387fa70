//! Exponential (radial) kernel implementation
//!
//! The exponential kernel is defined as: K(x, y) = exp(-||x - y|| / (2s²))
//! where s (scale) controls how quickly similarity decays with distance.
//! Note the unsquared distance in the numerator: this is the Laplacian-style
//! variant, not the Gaussian RBF.

use crate::kernel::Kernel;
use crate::utils::euclidean_distance;

/// Exponential kernel: K(x, y) = exp(-||x - y|| / (2s²))
///
/// Similarity depends only on the distance between the two points:
/// identical points score exactly 1 and the value decays toward 0 as the
/// points move apart. The scale parameter controls the decay rate:
/// - small scale: only near-identical points look similar
/// - large scale: distant points retain influence
#[derive(Debug, Clone, Copy)]
pub struct ExponentialKernel {
    scale: f64,
}

impl ExponentialKernel {
    /// Create a new exponential kernel with the specified scale
    ///
    /// # Panics
    /// Panics if scale is zero (the decay denominator would divide by zero).
    pub fn new(scale: f64) -> Self {
        assert!(scale != 0.0, "Scale must be nonzero");
        Self { scale }
    }

    /// Get the scale parameter
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Kernel for ExponentialKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        let distance = euclidean_distance(x, y);
        (-distance / (2.0 * self.scale * self.scale)).exp()
    }
}
