//! Dense numeric value blocks attached to parameters.

use crate::element::ElementError;

/// A dense block of numeric data: a scalar, a vector, or a rectangular
/// matrix. Rank is capped at two; higher-rank data travels through the
/// sparse record form instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DenseValues {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix { rows: Vec<Vec<f64>>, cols: usize },
}

impl DenseValues {
    /// Rectangular matrix from rows. Every row must match the first
    /// row's length.
    pub fn matrix(rows: Vec<Vec<f64>>) -> Result<DenseValues, ElementError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(ElementError::RaggedMatrix {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
        }
        Ok(DenseValues::Matrix { rows, cols })
    }

    /// Array rank: 0 for a scalar, 1 for a vector, 2 for a matrix.
    pub fn rank(&self) -> usize {
        match self {
            DenseValues::Scalar(_) => 0,
            DenseValues::Vector(_) => 1,
            DenseValues::Matrix { .. } => 2,
        }
    }

    /// Extent along each axis, empty for a scalar.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            DenseValues::Scalar(_) => Vec::new(),
            DenseValues::Vector(values) => vec![values.len()],
            DenseValues::Matrix { rows, cols } => vec![rows.len(), *cols],
        }
    }

    /// Row-major traversal as (positional indices, value) pairs.
    pub fn entries(&self) -> Vec<(Vec<usize>, f64)> {
        match self {
            DenseValues::Scalar(value) => vec![(Vec::new(), *value)],
            DenseValues::Vector(values) => values
                .iter()
                .enumerate()
                .map(|(i, value)| (vec![i], *value))
                .collect(),
            DenseValues::Matrix { rows, .. } => rows
                .iter()
                .enumerate()
                .flat_map(|(i, row)| {
                    row.iter()
                        .enumerate()
                        .map(move |(j, value)| (vec![i, j], *value))
                })
                .collect(),
        }
    }
}

impl From<f64> for DenseValues {
    fn from(value: f64) -> Self {
        DenseValues::Scalar(value)
    }
}

impl From<Vec<f64>> for DenseValues {
    fn from(values: Vec<f64>) -> Self {
        DenseValues::Vector(values)
    }
}

impl From<&[f64]> for DenseValues {
    fn from(values: &[f64]) -> Self {
        DenseValues::Vector(values.to_vec())
    }
}
