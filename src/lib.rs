//! Rust implementation of the kernel perceptron
//!
//! An online, mistake-driven binary classifier: the model is the list of
//! past mistakes, and prediction is a kernel-weighted vote over them.

pub mod api;
pub mod core;
pub mod data;
pub mod kernel;
pub mod perceptron;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::{Checkpoint, Perceptron, TrainingRun};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::data::CSVDataset;
pub use crate::kernel::{DotProductKernel, ExponentialKernel, Kernel, PolynomialKernel};
pub use crate::perceptron::KernelPerceptron;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
