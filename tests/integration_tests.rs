//! Integration tests for the kperceptron library
//!
//! These tests verify end-to-end functionality across multiple modules
//! and validate real-world usage scenarios.

use approx::assert_relative_eq;
use kperceptron::api::Perceptron;
use kperceptron::kernel::{DotProductKernel, ExponentialKernel, Kernel, PolynomialKernel};
use kperceptron::{CSVDataset, Dataset, KernelPerceptron};
use std::io::Write;
use tempfile::NamedTempFile;

/// Test complete workflow: data loading -> online training -> rates
#[test]
fn test_complete_workflow_csv() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");

    // Linearly separable dataset with a header row
    writeln!(temp_file, "feature1,feature2,label").expect("Failed to write");
    writeln!(temp_file, "2.0,1.0,1").expect("Failed to write");
    writeln!(temp_file, "-2.0,-1.0,-1").expect("Failed to write");
    writeln!(temp_file, "1.8,1.1,1").expect("Failed to write");
    writeln!(temp_file, "-1.8,-1.1,-1").expect("Failed to write");
    writeln!(temp_file, "2.2,0.9,1").expect("Failed to write");
    writeln!(temp_file, "-2.2,-0.9,-1").expect("Failed to write");
    temp_file.flush().expect("Failed to flush");

    let run = Perceptron::new()
        .with_report_interval(2)
        .train_from_csv(temp_file.path())
        .expect("Training should succeed");

    assert_eq!(run.examples_seen(), 6);
    // The very first positive example is always a mistake on an empty
    // model; after that these points separate cleanly.
    assert_eq!(run.mistake_count(), 1);
    assert_relative_eq!(run.mistake_rate(), 1.0 / 6.0, max_relative = 1e-12);
    assert_eq!(run.checkpoints().len(), 3);

    // A second read-only scoring pass makes no further errors
    let dataset = CSVDataset::from_file(temp_file.path()).expect("Failed to load dataset");
    assert_eq!(run.error_rate(&dataset), 0.0);
}

/// The reference driver scenario: polynomial and exponential perceptrons
/// trained over the same pass, tracked at the same checkpoints.
#[test]
fn test_polynomial_vs_exponential_pass() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");

    for i in 0..20 {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        writeln!(temp_file, "{},{},{}", sign * 3.0, sign * 2.0, sign as i32)
            .expect("Failed to write");
    }
    temp_file.flush().expect("Failed to flush");

    let dataset = CSVDataset::from_file(temp_file.path()).expect("Failed to load dataset");

    let poly = Perceptron::with_kernel(PolynomialKernel::new(5))
        .with_report_interval(5)
        .train(&dataset)
        .expect("Polynomial pass should succeed");
    let exp = Perceptron::with_kernel(ExponentialKernel::new(10.0))
        .with_report_interval(5)
        .train(&dataset)
        .expect("Exponential pass should succeed");

    assert_eq!(poly.checkpoints().len(), 4);
    assert_eq!(exp.checkpoints().len(), 4);

    // Mistake rates can only shrink as the denominator grows on data the
    // model has stopped mispredicting
    let poly_rates: Vec<f64> = poly.checkpoints().iter().map(|c| c.mistake_rate()).collect();
    assert!(poly_rates.windows(2).all(|w| w[1] <= w[0]));

    assert!(poly.mistake_rate() <= 0.5);
    assert!(exp.mistake_rate() <= 0.5);
}

/// Mistake-driven invariant at the library level: every stored mistake was
/// mispredicted by the model state that preceded it.
#[test]
fn test_mistake_history_invariant() {
    let points: Vec<(Vec<f64>, f64)> = vec![
        (vec![1.0, 0.5], 1.0),
        (vec![-1.0, -0.5], -1.0),
        (vec![0.2, 0.1], 1.0),
        (vec![-0.2, -0.1], -1.0),
        (vec![2.0, 1.0], 1.0),
    ];

    let mut model = KernelPerceptron::new(DotProductKernel::new());
    let mut replay = KernelPerceptron::new(DotProductKernel::new());

    for (point, label) in &points {
        let predicted = model.predict(point);
        let correct = model.update(point, *label);
        assert_eq!(correct, predicted == *label);
    }

    // Replaying the recorded mistakes in order reconstructs the model
    for mistake in model.mistakes() {
        replay.update(&mistake.features, mistake.label);
    }
    assert_eq!(replay.mistake_count(), model.mistake_count());
    for (point, _) in &points {
        assert_eq!(replay.predict(point), model.predict(point));
    }
}

/// Kernel contract checks at integration level
#[test]
fn test_kernel_reference_values() {
    // dot([1,1],[1,1]) + 1 = 3
    assert_eq!(DotProductKernel::new().compute(&[1.0, 1.0], &[1.0, 1.0]), 3.0);

    // (dot([1,0],[0,1]) + 1)^2 = 1
    assert_eq!(PolynomialKernel::new(2).compute(&[1.0, 0.0], &[0.0, 1.0]), 1.0);

    // exp(-5 / 2) for points at distance 5, scale 1
    assert_relative_eq!(
        ExponentialKernel::new(1.0).compute(&[0.0, 0.0], &[3.0, 4.0]),
        0.0821,
        max_relative = 1e-3
    );
}

/// Fresh models predict -1 everywhere, for every kernel variant
#[test]
fn test_untrained_prediction_default() {
    let probe = [3.0, -1.0, 0.5];

    assert_eq!(KernelPerceptron::new(DotProductKernel::new()).predict(&probe), -1.0);
    assert_eq!(KernelPerceptron::new(PolynomialKernel::new(3)).predict(&probe), -1.0);
    assert_eq!(KernelPerceptron::new(ExponentialKernel::new(2.0)).predict(&probe), -1.0);
}

/// CSV loading feeds consistent dimensionality into the classifier
#[test]
fn test_csv_to_classifier_dimensions() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(temp_file, "0.5,1.5,2.5,1").expect("Failed to write");
    writeln!(temp_file, "-0.5,-1.5,-2.5,-1").expect("Failed to write");
    temp_file.flush().expect("Failed to flush");

    let dataset = CSVDataset::from_file(temp_file.path()).expect("Failed to load dataset");
    assert_eq!(dataset.dim(), 3);
    assert_eq!(dataset.len(), 2);

    let run = Perceptron::new().train(&dataset).expect("Training should succeed");
    for mistake in run.model().mistakes() {
        assert_eq!(mistake.dim(), 3);
    }
}

/// Missing file surfaces as an IO error, not a panic
#[test]
fn test_missing_file_is_an_error() {
    let result = Perceptron::new().train_from_csv("/nonexistent/path/data.csv");
    assert!(result.is_err());
}
