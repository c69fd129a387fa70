//! CSV format dataset implementation
//!
//! Supports loading datasets from CSV files where:
//! - The last column is the label
//! - All other columns are features
//! - First row can be headers (automatically detected)
//!
//! All feature parsing happens here: the classifier core only ever sees
//! already-numeric vectors of uniform width.

use crate::core::{Dataset, PerceptronError, Result, Sample};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dataset implementation for CSV format files
#[derive(Debug, Clone)]
pub struct CSVDataset {
    samples: Vec<Sample>,
    dimensions: usize,
}

impl CSVDataset {
    /// Load a dataset from a CSV file
    ///
    /// The last column is assumed to be the label.
    /// Headers are automatically detected if present.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(PerceptronError::IoError)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a dataset from a reader, auto-detecting a header row
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a dataset from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        mut reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut samples: Vec<Sample> = Vec::new();
        let mut first_line = String::new();

        // Read first line to check for headers
        reader.read_line(&mut first_line).map_err(PerceptronError::IoError)?;
        let first_line = first_line.trim();

        if first_line.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        if first_line.starts_with('#') {
            // Skip comment, continue processing
        } else {
            let has_header = if auto_detect_header {
                Self::is_header_line(first_line)
            } else {
                false
            };

            // If no header, process the first line as data
            if !has_header {
                samples.push(Self::parse_data_line(first_line)?);
            }
        }

        // Process remaining lines
        for line in reader.lines() {
            let line = line.map_err(PerceptronError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let sample = Self::parse_data_line(line)?;
            if let Some(first) = samples.first() {
                if sample.dim() != first.dim() {
                    return Err(PerceptronError::DimensionMismatch {
                        expected: first.dim(),
                        actual: sample.dim(),
                    });
                }
            }
            samples.push(sample);
        }

        if samples.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        let dimensions = samples[0].dim();
        Ok(CSVDataset {
            samples,
            dimensions,
        })
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() < 2 {
            return false;
        }

        // Headers are lines where most non-label fields fail to parse
        let non_numeric_count = fields
            .iter()
            .take(fields.len() - 1)
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();

        non_numeric_count > fields.len() / 2
    }

    /// Parse a CSV data line into a Sample
    fn parse_data_line(line: &str) -> Result<Sample> {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

        if fields.len() < 2 {
            return Err(PerceptronError::ParseError(format!(
                "Line has too few fields: {line}"
            )));
        }

        // Last field is the label
        let label_str = fields[fields.len() - 1];
        let label = label_str
            .parse::<f64>()
            .map_err(|_| PerceptronError::ParseError(format!("Invalid label: {label_str}")))?;

        // Coerce non-binary labels by sign
        let label = if label == 1.0 || label == -1.0 {
            label
        } else if label > 0.0 {
            1.0
        } else {
            -1.0
        };

        let mut features = Vec::with_capacity(fields.len() - 1);
        for (idx, field) in fields.iter().take(fields.len() - 1).enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                PerceptronError::ParseError(format!(
                    "Invalid feature value at column {}: {field}",
                    idx + 1
                ))
            })?;
            features.push(value);
        }

        Ok(Sample::new(features, label))
    }
}

impl Dataset for CSVDataset {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn dim(&self) -> usize {
        self.dimensions
    }

    fn get_sample(&self, i: usize) -> Sample {
        self.samples[i].clone()
    }

    fn get_labels(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.label).collect()
    }
}
