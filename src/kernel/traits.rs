//! Kernel trait definition

/// Kernel function trait
///
/// A kernel K(x, y) stands in for an inner product in some feature space.
/// All kernel variants implement this one interface so the perceptron can
/// hold any of them without knowing which.
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    ///
    /// Both vectors must have the same length.
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;
}
