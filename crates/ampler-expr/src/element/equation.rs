//! Constraint symbols.

use crate::element::{impl_element_transforms, IndexSet, Suffix};
use crate::expr::{Condition, Relation};

/// A named constraint, scalar or indexed, optionally carrying its
/// defining relation. Equations expose the `l`, `m`, `lo`, and `up`
/// suffix views; `fx` is a variable-only concept.
#[derive(Debug, Clone)]
pub struct Equation {
    name: String,
    pub(crate) indices: Vec<IndexSet>,
    pub(crate) condition: Option<Condition>,
    suffix: Option<Suffix>,
    definition: Option<Relation>,
}

impl Equation {
    /// Scalar equation.
    pub fn new(name: impl Into<String>) -> Equation {
        Equation {
            name: name.into(),
            indices: Vec::new(),
            condition: None,
            suffix: None,
            definition: None,
        }
    }

    /// Equation indexed over the given sets.
    pub fn over<I, T>(name: impl Into<String>, indices: I) -> Equation
    where
        I: IntoIterator<Item = T>,
        T: Into<IndexSet>,
    {
        Equation {
            name: name.into(),
            indices: indices.into_iter().map(Into::into).collect(),
            condition: None,
            suffix: None,
            definition: None,
        }
    }

    /// Copy with the defining relation attached.
    pub fn defined_by(&self, relation: Relation) -> Equation {
        let mut copy = self.clone();
        copy.definition = Some(relation);
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

    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    pub fn definition(&self) -> Option<&Relation> {
        self.definition.as_ref()
    }

    fn with_suffix(&self, suffix: Suffix) -> Equation {
        let mut copy = self.clone();
        copy.suffix = Some(suffix);
        copy
    }

    /// Activity level view.
    pub fn l(&self) -> Equation {
        self.with_suffix(Suffix::Level)
    }

    /// Marginal (dual value) view.
    pub fn m(&self) -> Equation {
        self.with_suffix(Suffix::Marginal)
    }

    /// Lower bound view.
    pub fn lo(&self) -> Equation {
        self.with_suffix(Suffix::Lower)
    }

    /// Upper bound view.
    pub fn up(&self) -> Equation {
        self.with_suffix(Suffix::Upper)
    }
}

impl_element_transforms!(Equation);

#[cfg(test)]
mod tests {
    use super::Equation;
    use crate::element::{Set, Suffix, VarKind, Variable};
    use crate::expr::le;

    #[test]
    fn defined_by_copies_the_equation() {
        let i = Set::new("i", ["a"]);
        let x = Variable::over("x", VarKind::Positive, [&i]);
        let supply = Equation::over("supply", [&i]);

        let relation = le(&x, 10.0).expect("relation");
        let defined = supply.defined_by(relation);
        assert!(defined.definition().is_some());
        assert!(supply.definition().is_none());
    }

    #[test]
    fn equation_suffix_views() {
        let supply = Equation::new("supply");
        assert_eq!(supply.m().suffix(), Some(Suffix::Marginal));
        assert_eq!(supply.lo().suffix(), Some(Suffix::Lower));
        assert_eq!(supply.suffix(), None);
    }
}
