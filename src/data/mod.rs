//! Data loading and dataset implementations
//!
//! This module provides implementations of the Dataset trait for the
//! delimited formats the driver consumes.

pub mod csv;

pub use self::csv::*;
