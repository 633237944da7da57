//! Model elements: sets, aliases, parameters, variables, equations.
//!
//! Elements are copy-on-transform values: `ix`, `no_indices`, `cond`, and
//! the suffix views all return new instances and leave the original
//! untouched. Sets are cheap-clone handles; index references share the
//! underlying set data instead of owning a copy.

mod alias;
mod equation;
mod error;
mod parameter;
mod set;
mod values;
mod variable;

pub use alias::Alias;
pub use equation::Equation;
pub use error::ElementError;
pub use parameter::Parameter;
pub use set::{Set, SetMembers};
pub use values::DenseValues;
pub use variable::{VarKind, Variable};

/// Suffix views addressing bound/level fields of variables and equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suffix {
    Level,
    Marginal,
    Lower,
    Upper,
    Fixed,
}

impl Suffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::Level => "l",
            Suffix::Marginal => "m",
            Suffix::Lower => "lo",
            Suffix::Upper => "up",
            Suffix::Fixed => "fx",
        }
    }

    /// Parse a suffix token.
    pub fn parse(token: &str) -> Result<Self, ElementError> {
        match token {
            "l" => Ok(Suffix::Level),
            "m" => Ok(Suffix::Marginal),
            "lo" => Ok(Suffix::Lower),
            "up" => Ok(Suffix::Upper),
            "fx" => Ok(Suffix::Fixed),
            other => Err(ElementError::InvalidSuffix {
                suffix: other.to_string(),
            }),
        }
    }
}

/// An index domain reference: a set, or an alias standing in for one.
#[derive(Debug, Clone)]
pub enum IndexSet {
    Set(Set),
    Alias(Alias),
}

impl IndexSet {
    /// Name rendered in index positions.
    pub fn name(&self) -> &str {
        match self {
            IndexSet::Set(set) => set.name(),
            IndexSet::Alias(alias) => alias.name(),
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            IndexSet::Set(set) => set.level(),
            IndexSet::Alias(alias) => alias.level(),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            IndexSet::Set(set) => set.dim(),
            IndexSet::Alias(alias) => alias.dim(),
        }
    }

    /// Member labels of a flat domain, if loaded.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            IndexSet::Set(set) => set.labels(),
            IndexSet::Alias(alias) => alias.labels(),
        }
    }

    /// Number of members, if loaded.
    pub fn cardinality(&self) -> Option<usize> {
        match self {
            IndexSet::Set(set) => set.cardinality(),
            IndexSet::Alias(alias) => alias.cardinality(),
        }
    }
}

impl From<Set> for IndexSet {
    fn from(set: Set) -> Self {
        IndexSet::Set(set)
    }
}

impl From<&Set> for IndexSet {
    fn from(set: &Set) -> Self {
        IndexSet::Set(set.clone())
    }
}

impl From<Alias> for IndexSet {
    fn from(alias: Alias) -> Self {
        IndexSet::Alias(alias)
    }
}

impl From<&Alias> for IndexSet {
    fn from(alias: &Alias) -> Self {
        IndexSet::Alias(alias.clone())
    }
}

impl From<&IndexSet> for IndexSet {
    fn from(index: &IndexSet) -> Self {
        index.clone()
    }
}

// Copy-on-transform index and condition operations shared by indexable
// elements. Each method returns a new value; the receiver is unchanged.
macro_rules! impl_element_transforms {
    ($ty:ident) => {
        impl $ty {
            /// Rebind to a new index list; an empty list clears the indices.
            pub fn ix<I, T>(&self, indices: I) -> Self
            where
                I: IntoIterator<Item = T>,
                T: Into<$crate::element::IndexSet>,
            {
                let indices: Vec<$crate::element::IndexSet> =
                    indices.into_iter().map(Into::into).collect();
                if indices.is_empty() {
                    self.no_indices()
                } else {
                    self.with_indices(indices)
                }
            }

            /// Copy bound to the given index list.
            pub fn with_indices<I, T>(&self, indices: I) -> Self
            where
                I: IntoIterator<Item = T>,
                T: Into<$crate::element::IndexSet>,
            {
                let mut copy = self.clone();
                copy.indices = indices.into_iter().map(Into::into).collect();
                copy
            }

            /// Copy with all indices cleared.
            pub fn no_indices(&self) -> Self {
                let mut copy = self.clone();
                copy.indices = Vec::new();
                copy
            }

            /// Copy carrying a filter predicate rendered as a trailing
            /// `$(condition)`.
            pub fn cond(&self, condition: impl Into<$crate::expr::Condition>) -> Self {
                let mut copy = self.clone();
                copy.condition = Some(condition.into());
                copy
            }
        }
    };
}

pub(crate) use impl_element_transforms;
