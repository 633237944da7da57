//! Decision variable symbols.

use crate::element::{impl_element_transforms, ElementError, IndexSet, Suffix};
use crate::expr::Condition;

/// Variable sign/domain class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VarKind {
    Positive,
    Binary,
    Free,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Positive => "positive",
            VarKind::Binary => "binary",
            VarKind::Free => "free",
        }
    }

    pub fn parse(token: &str) -> Result<Self, ElementError> {
        match token {
            "positive" => Ok(VarKind::Positive),
            "binary" => Ok(VarKind::Binary),
            "free" => Ok(VarKind::Free),
            other => Err(ElementError::InvalidKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A decision variable, scalar or indexed, with an optional suffix view
/// addressing one of its bound/level fields.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    kind: VarKind,
    pub(crate) indices: Vec<IndexSet>,
    pub(crate) condition: Option<Condition>,
    suffix: Option<Suffix>,
}

impl Variable {
    /// Scalar variable.
    pub fn new(name: impl Into<String>, kind: VarKind) -> Variable {
        Variable {
            name: name.into(),
            kind,
            indices: Vec::new(),
            condition: None,
            suffix: None,
        }
    }

    /// Variable indexed over the given sets.
    pub fn over<I, T>(name: impl Into<String>, kind: VarKind, indices: I) -> Variable
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexSet>,
    {
        Variable {
            name: name.into(),
            kind,
            indices: indices.into_iter().map(Into::into).collect(),
            condition: None,
            suffix: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VarKind {
        self.kind
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

    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    fn with_suffix(&self, suffix: Suffix) -> Variable {
        let mut copy = self.clone();
        copy.suffix = Some(suffix);
        copy
    }

    /// Activity level view.
    pub fn l(&self) -> Variable {
        self.with_suffix(Suffix::Level)
    }

    /// Marginal (reduced cost) view.
    pub fn m(&self) -> Variable {
        self.with_suffix(Suffix::Marginal)
    }

    /// Lower bound view.
    pub fn lo(&self) -> Variable {
        self.with_suffix(Suffix::Lower)
    }

    /// Upper bound view.
    pub fn up(&self) -> Variable {
        self.with_suffix(Suffix::Upper)
    }

    /// Fixed value view, pinning lower and upper bounds together.
    pub fn fx(&self) -> Variable {
        self.with_suffix(Suffix::Fixed)
    }
}

impl_element_transforms!(Variable);

#[cfg(test)]
mod tests {
    use super::{VarKind, Variable};
    use crate::element::{ElementError, Set, Suffix};

    #[test]
    fn kind_tokens_roundtrip() {
        for token in ["positive", "binary", "free"] {
            let kind = VarKind::parse(token).expect("valid kind");
            assert_eq!(kind.as_str(), token);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = VarKind::parse("integer").unwrap_err();
        assert_eq!(
            err,
            ElementError::InvalidKind {
                kind: "integer".to_string()
            }
        );
    }

    #[test]
    fn suffix_views_copy_the_variable() {
        let i = Set::new("i", ["a"]);
        let x = Variable::over("x", VarKind::Positive, [&i]);
        let fixed = x.fx();
        assert_eq!(fixed.suffix(), Some(Suffix::Fixed));
        assert_eq!(x.suffix(), None);
        assert_eq!(fixed.dim(), 1);
    }
}
