//! High-level API for kernel perceptron training
//!
//! This module provides a user-friendly interface for the common task:
//! run one online pass over a dataset, tracking the running mistake rate.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kperceptron::api::Perceptron;
//! use kperceptron::kernel::PolynomialKernel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let run = Perceptron::with_kernel(PolynomialKernel::new(5))
//!     .with_report_interval(100)
//!     .train_from_csv("data/validation.csv")?;
//!
//! println!("Mistake rate: {:.4}", run.mistake_rate());
//! # Ok(())
//! # }
//! ```

use crate::core::{Dataset, PerceptronError, Result};
use crate::data::CSVDataset;
use crate::kernel::{DotProductKernel, Kernel};
use crate::perceptron::KernelPerceptron;
use log::{debug, info};
use std::path::Path;

/// Default checkpoint interval for running mistake rates
pub const DEFAULT_REPORT_INTERVAL: usize = 100;

/// High-level perceptron interface with builder pattern
pub struct Perceptron<K: Kernel = DotProductKernel> {
    kernel: K,
    report_interval: usize,
}

impl Perceptron<DotProductKernel> {
    /// Create a new perceptron with the dot product kernel
    pub fn new() -> Self {
        Self::with_kernel(DotProductKernel::new())
    }
}

impl Default for Perceptron<DotProductKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> Perceptron<K> {
    /// Create a perceptron with a custom kernel
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    /// Set how often a running-rate checkpoint is recorded
    ///
    /// An interval of 0 disables intermediate checkpoints.
    pub fn with_report_interval(mut self, report_interval: usize) -> Self {
        self.report_interval = report_interval;
        self
    }

    /// Run one sequential training pass over a dataset
    ///
    /// Examples are presented to `update` in index order, once each. A
    /// checkpoint is recorded every `report_interval` examples.
    pub fn train<D: Dataset>(self, dataset: &D) -> Result<TrainingRun<K>> {
        if dataset.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        info!(
            "Online pass over {} examples ({} features)",
            dataset.len(),
            dataset.dim()
        );

        let mut model = KernelPerceptron::new(self.kernel);
        let mut checkpoints = Vec::new();

        for i in 0..dataset.len() {
            let sample = dataset.get_sample(i);
            model.update(&sample.features, sample.label);

            let seen = i + 1;
            if self.report_interval > 0 && seen % self.report_interval == 0 {
                let checkpoint = Checkpoint {
                    examples_seen: seen,
                    mistakes: model.mistake_count(),
                };
                debug!(
                    "checkpoint {}: {} mistakes, rate {:.4}",
                    seen,
                    checkpoint.mistakes,
                    checkpoint.mistake_rate()
                );
                checkpoints.push(checkpoint);
            }
        }

        info!(
            "Pass complete: {} mistakes over {} examples",
            model.mistake_count(),
            dataset.len()
        );

        Ok(TrainingRun {
            model,
            checkpoints,
            examples_seen: dataset.len(),
        })
    }

    /// Run one training pass over a CSV file (automatically detects headers)
    pub fn train_from_csv<P: AsRef<Path>>(self, path: P) -> Result<TrainingRun<K>> {
        let dataset = CSVDataset::from_file(path)?;
        self.train(&dataset)
    }
}

/// Running-rate snapshot taken during a training pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Number of examples presented so far
    pub examples_seen: usize,
    /// Number of mistakes recorded so far
    pub mistakes: usize,
}

impl Checkpoint {
    /// Empirical mistake rate at this point of the pass
    pub fn mistake_rate(&self) -> f64 {
        self.mistakes as f64 / self.examples_seen as f64
    }
}

/// Result of a training pass: the trained model plus its mistake curve
#[derive(Debug)]
pub struct TrainingRun<K: Kernel> {
    model: KernelPerceptron<K>,
    checkpoints: Vec<Checkpoint>,
    examples_seen: usize,
}

impl<K: Kernel> TrainingRun<K> {
    /// The trained model
    pub fn model(&self) -> &KernelPerceptron<K> {
        &self.model
    }

    /// Consume the run, keeping only the model
    pub fn into_model(self) -> KernelPerceptron<K> {
        self.model
    }

    /// Checkpoints recorded during the pass, in order
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Number of examples presented during the pass
    pub fn examples_seen(&self) -> usize {
        self.examples_seen
    }

    /// Total mistakes made during the pass
    pub fn mistake_count(&self) -> usize {
        self.model.mistake_count()
    }

    /// Final empirical mistake rate (mistakes / examples)
    pub fn mistake_rate(&self) -> f64 {
        self.mistake_count() as f64 / self.examples_seen as f64
    }

    /// Prediction-only error rate on a dataset
    ///
    /// Scores every sample against the trained model without updating it:
    /// the fraction of samples whose predicted label differs from the
    /// stored label.
    pub fn error_rate<D: Dataset>(&self, dataset: &D) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }

        let errors = (0..dataset.len())
            .filter(|&i| {
                let sample = dataset.get_sample(i);
                self.model.predict(&sample.features) != sample.label
            })
            .count();

        errors as f64 / dataset.len() as f64
    }
}
