//! Numeric data symbols.

use crate::element::{impl_element_transforms, DenseValues, IndexSet};
use crate::expr::Condition;

/// A named numeric data symbol, scalar or indexed over sets.
///
/// Dimensionality is the declared index count; attached data is validated
/// against it downstream, never the other way around.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    pub(crate) indices: Vec<IndexSet>,
    pub(crate) condition: Option<Condition>,
    values: Option<DenseValues>,
}

impl Parameter {
    /// Scalar parameter.
    pub fn new(name: impl Into<String>) -> Parameter {
        Parameter {
            name: name.into(),
            indices: Vec::new(),
            condition: None,
            values: None,
        }
    }

    /// Parameter indexed over the given sets.
    pub fn over<I, T>(name: impl Into<String>, indices: I) -> Parameter
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexSet>,
    {
        Parameter {
            name: name.into(),
            indices: indices.into_iter().map(Into::into).collect(),
            condition: None,
            values: None,
        }
    }

    /// Copy with a dense value block attached.
    pub fn with_values(&self, values: impl Into<DenseValues>) -> Parameter {
        let mut copy = self.clone();
        copy.values = Some(values.into());
        copy
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared index count.
    pub fn dim(&self) -> usize {
        self.indices.len()
    }

    pub fn indices(&self) -> &[IndexSet] {
        &self.indices
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn values(&self) -> Option<&DenseValues> {
        self.values.as_ref()
    }

    /// Whether data has been attached; `false` means structural only.
    pub fn is_loaded(&self) -> bool {
        self.values.is_some()
    }
}

impl_element_transforms!(Parameter);
