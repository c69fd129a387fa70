//! Core type definitions for the kernel perceptron

/// Dense feature vector
///
/// Every vector fed to one classifier instance has the same length; the
/// data loading layer enforces this before the core ever sees a point.
pub type DenseVector = Vec<f64>;

/// Training sample with features and label
///
/// Also serves as the mistake record the classifier retains: a stored
/// sample is a point the model mispredicted at the time it was presented.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Feature vector (dense representation)
    pub features: DenseVector,
    /// Class label (+1 or -1 for binary classification)
    pub label: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: DenseVector, label: f64) -> Self {
        Self { features, label }
    }

    /// Number of features
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}
