//! Kernel perceptron implementation
//!
//! The model is nothing but the list of past mistakes. Prediction sums the
//! kernel similarity to every stored mistake, weighted by that mistake's
//! label, and takes the sign; an update appends to the list only when the
//! current model gets the presented example wrong.

use log::debug;

use crate::core::Sample;
use crate::kernel::Kernel;

/// Online mistake-driven binary classifier over an arbitrary kernel
///
/// State grows monotonically: every recorded mistake stays in the model
/// for the lifetime of the instance, in the order it was made. Prediction
/// cost is O(mistakes × dimension) per call; nothing is cached.
#[derive(Debug)]
pub struct KernelPerceptron<K: Kernel> {
    kernel: K,
    mistakes: Vec<Sample>,
}

impl<K: Kernel> KernelPerceptron<K> {
    /// Create an untrained perceptron with the given kernel
    ///
    /// The kernel is fixed for the lifetime of the instance.
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            mistakes: Vec::new(),
        }
    }

    /// Raw decision value for a point
    ///
    /// Sum over all stored mistakes of label * K(mistake, point).
    /// Zero on an empty history.
    pub fn decision_function(&self, point: &[f64]) -> f64 {
        self.mistakes
            .iter()
            .map(|m| m.label * self.kernel.compute(&m.features, point))
            .sum()
    }

    /// Predict the label of a point (+1.0 or -1.0)
    ///
    /// Returns +1 only for a strictly positive decision value; a value of
    /// exactly zero resolves to -1. In particular an untrained perceptron
    /// predicts -1 for every input. Does not modify state.
    pub fn predict(&self, point: &[f64]) -> f64 {
        if self.decision_function(point) > 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Present one labeled example and learn from it if mispredicted
    ///
    /// Returns true when the current model already predicts `label` for
    /// `point` (no state change). Returns false when the prediction was
    /// wrong, in which case the example is appended to the mistake history.
    /// The label is not validated; callers supply +1 or -1.
    pub fn update(&mut self, point: &[f64], label: f64) -> bool {
        if self.predict(point) == label {
            true
        } else {
            debug!(
                "mistake #{}: label {label}, dim {}",
                self.mistakes.len() + 1,
                point.len()
            );
            self.mistakes.push(Sample::new(point.to_vec(), label));
            false
        }
    }

    /// Number of mistakes recorded so far
    pub fn mistake_count(&self) -> usize {
        self.mistakes.len()
    }

    /// Read-only view of the mistake history, in the order recorded
    pub fn mistakes(&self) -> &[Sample] {
        &self.mistakes
    }

    /// Access the kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}
