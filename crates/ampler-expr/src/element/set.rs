//! Named ordered index domains.

use std::sync::Arc;

use crate::element::{ElementError, IndexSet};

/// Ordered members of a set: flat labels, or tuple rows for composite sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetMembers {
    Labels(Vec<String>),
    Tuples(Vec<Vec<String>>),
}

impl SetMembers {
    pub fn len(&self) -> usize {
        match self {
            SetMembers::Labels(labels) => labels.len(),
            SetMembers::Tuples(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct SetInner {
    name: String,
    dim: usize,
    level: u32,
    index_sets: Vec<IndexSet>,
    members: Option<SetMembers>,
}

/// A named ordered index domain.
///
/// Cloning is cheap: all clones share the same underlying data, which is
/// what lets parameters and variables reference a set without owning it.
/// A flat set has `dim == 1` and `level == 0`; a composite set built over
/// index sets with maximum level L has `level == L + 1`.
#[derive(Debug, Clone)]
pub struct Set {
    inner: Arc<SetInner>,
}

impl Set {
    /// Flat set from a name and ordered member labels.
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Set {
        Set {
            inner: Arc::new(SetInner {
                name: name.into(),
                dim: 1,
                level: 0,
                index_sets: Vec::new(),
                members: Some(SetMembers::Labels(
                    members.into_iter().map(Into::into).collect(),
                )),
            }),
        }
    }

    /// Flat set declared by name only, with no members loaded yet.
    pub fn declared(name: impl Into<String>) -> Set {
        Set {
            inner: Arc::new(SetInner {
                name: name.into(),
                dim: 1,
                level: 0,
                index_sets: Vec::new(),
                members: None,
            }),
        }
    }

    /// Composite set built over other sets; members are computed elsewhere
    /// and attached later via [`Set::with_tuples`].
    pub fn over<I, T>(name: impl Into<String>, indices: I) -> Result<Set, ElementError>
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexSet>,
    {
        let name = name.into();
        let index_sets: Vec<IndexSet> = indices.into_iter().map(Into::into).collect();
        if index_sets.is_empty() {
            return Err(ElementError::EmptyIndexList { set: name });
        }
        let level = 1 + index_sets
            .iter()
            .map(IndexSet::level)
            .max()
            .unwrap_or_default();
        Ok(Set {
            inner: Arc::new(SetInner {
                dim: index_sets.len(),
                level,
                index_sets,
                members: None,
                name,
            }),
        })
    }

    /// Copy of this set with flat member labels attached.
    pub fn with_labels(
        &self,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Set, ElementError> {
        if self.dim() != 1 {
            return Err(ElementError::TupleArity {
                set: self.name().to_string(),
                expected: self.dim(),
                actual: 1,
            });
        }
        Ok(self.replace_members(SetMembers::Labels(
            labels.into_iter().map(Into::into).collect(),
        )))
    }

    /// Copy of this set with tuple members attached. Each row's arity must
    /// equal the set's dimensionality.
    pub fn with_tuples(&self, rows: Vec<Vec<String>>) -> Result<Set, ElementError> {
        for row in &rows {
            if row.len() != self.dim() {
                return Err(ElementError::TupleArity {
                    set: self.name().to_string(),
                    expected: self.dim(),
                    actual: row.len(),
                });
            }
        }
        Ok(self.replace_members(SetMembers::Tuples(rows)))
    }

    fn replace_members(&self, members: SetMembers) -> Set {
        Set {
            inner: Arc::new(SetInner {
                name: self.inner.name.clone(),
                dim: self.inner.dim,
                level: self.inner.level,
                index_sets: self.inner.index_sets.clone(),
                members: Some(members),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Dimensionality: 1 for a flat set, the index count for a composite.
    pub fn dim(&self) -> usize {
        self.inner.dim
    }

    /// Dependency depth used to order declarations before export.
    pub fn level(&self) -> u32 {
        self.inner.level
    }

    /// Index sets of a composite set; empty for flat sets.
    pub fn index_sets(&self) -> &[IndexSet] {
        &self.inner.index_sets
    }

    pub fn members(&self) -> Option<&SetMembers> {
        self.inner.members.as_ref()
    }

    /// Flat member labels, if loaded.
    pub fn labels(&self) -> Option<&[String]> {
        match self.inner.members.as_ref()? {
            SetMembers::Labels(labels) => Some(labels),
            SetMembers::Tuples(_) => None,
        }
    }

    /// Number of members, if loaded.
    pub fn cardinality(&self) -> Option<usize> {
        self.inner.members.as_ref().map(SetMembers::len)
    }

    /// Whether two handles share the same underlying set data.
    pub fn shares_data_with(&self, other: &Set) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
