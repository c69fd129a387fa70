//! Shared numeric helpers for dense vectors
//!
//! Every kernel is a small formula over one of these two quantities, so
//! the loops live here rather than in each kernel file.

/// Compute the dot product of two dense vectors
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot(u: &[f64], v: &[f64]) -> f64 {
    assert_eq!(
        u.len(),
        v.len(),
        "Vector length mismatch: {} vs {}",
        u.len(),
        v.len()
    );
    u.iter().zip(v).map(|(a, b)| a * b).sum()
}

/// Compute the squared Euclidean distance between two dense vectors
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn squared_euclidean_distance(u: &[f64], v: &[f64]) -> f64 {
    assert_eq!(
        u.len(),
        v.len(),
        "Vector length mismatch: {} vs {}",
        u.len(),
        v.len()
    );
    u.iter()
        .zip(v)
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}

/// Compute the Euclidean distance between two dense vectors
pub fn euclidean_distance(u: &[f64], v: &[f64]) -> f64 {
    squared_euclidean_distance(u, v).sqrt()
}
