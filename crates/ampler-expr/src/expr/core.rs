//! Core expression tree.
//!
//! Expressions are immutable build-once trees: every operator combination
//! allocates new nodes and never mutates its operands. Parenthesization is
//! decided at combination time and recorded on the node; only binary nodes
//! ever render parentheses, so the flag is a no-op on leaves and calls.

use crate::element::{Alias, Equation, IndexSet, Parameter, Set, Suffix, Variable};
use crate::expr::agg::AggCall;
use crate::expr::error::ExprError;
use crate::expr::relation::Relation;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn token(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// A symbol occurrence inside an expression: the element's name plus the
/// index list, suffix, and filter it was referenced with.
#[derive(Debug, Clone)]
pub struct SymbolRef {
    name: String,
    indices: Vec<IndexSet>,
    suffix: Option<Suffix>,
    condition: Option<Condition>,
}

impl SymbolRef {
    pub(crate) fn new(
        name: &str,
        indices: &[IndexSet],
        suffix: Option<Suffix>,
        condition: Option<&Condition>,
    ) -> SymbolRef {
        SymbolRef {
            name: name.to_string(),
            indices: indices.to_vec(),
            suffix,
            condition: condition.cloned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn indices(&self) -> &[IndexSet] {
        &self.indices
    }

    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

/// An expression tree node.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(SymbolRef),
    Literal(f64),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        parenthesized: bool,
    },
    Call(AggCall),
}

impl Expr {
    /// Copy with the parenthesization flag raised. Leaves and calls carry
    /// their own delimiters, so the flag only sticks to binary nodes.
    pub fn parenthesized(self) -> Expr {
        match self {
            Expr::Binary { op, lhs, rhs, .. } => Expr::Binary {
                op,
                lhs,
                rhs,
                parenthesized: true,
            },
            other => other,
        }
    }

    pub fn is_parenthesized(&self) -> bool {
        matches!(
            self,
            Expr::Binary {
                parenthesized: true,
                ..
            }
        )
    }
}

/// Combine two subtrees under a binary operator, raising parenthesization
/// flags so the rendered text reproduces the construction order: addition
/// shields a right operand built from `+`/`-` (sign ambiguity),
/// subtraction always shields the right operand, multiplication and
/// division shield both.
pub(crate) fn combine(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    let (lhs, rhs) = match op {
        BinOp::Add => {
            let rhs = if matches!(
                rhs,
                Expr::Binary {
                    op: BinOp::Add | BinOp::Sub,
                    ..
                }
            ) {
                rhs.parenthesized()
            } else {
                rhs
            };
            (lhs, rhs)
        }
        BinOp::Sub => (lhs, rhs.parenthesized()),
        BinOp::Mul | BinOp::Div => (lhs.parenthesized(), rhs.parenthesized()),
    };
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        parenthesized: false,
    }
}

/// A filter predicate rendered as a trailing `$(...)`.
#[derive(Debug, Clone)]
pub enum Condition {
    Expr(Box<Expr>),
    Relation(Box<Relation>),
}

impl From<Expr> for Condition {
    fn from(expr: Expr) -> Self {
        Condition::Expr(Box::new(expr))
    }
}

impl From<Relation> for Condition {
    fn from(relation: Relation) -> Self {
        Condition::Relation(Box::new(relation))
    }
}

impl From<&Parameter> for Condition {
    fn from(parameter: &Parameter) -> Self {
        Condition::Expr(Box::new(parameter.as_expr()))
    }
}

impl From<Parameter> for Condition {
    fn from(parameter: Parameter) -> Self {
        Condition::from(&parameter)
    }
}

impl From<&Set> for Condition {
    fn from(set: &Set) -> Self {
        // Sets are valid membership filters even though they are not
        // arithmetic operands.
        Condition::Expr(Box::new(Expr::Symbol(SymbolRef::new(
            set.name(),
            &[],
            None,
            None,
        ))))
    }
}

impl From<Set> for Condition {
    fn from(set: Set) -> Self {
        Condition::from(&set)
    }
}

/// Capability of appearing as an arithmetic operand. Implemented by
/// expressions, literals, and every element whose bare reference is a
/// valid term; equations are excluded because they require a suffix view.
pub trait Arithmetic {
    fn as_expr(&self) -> Expr;
}

impl Arithmetic for Expr {
    fn as_expr(&self) -> Expr {
        self.clone()
    }
}

impl Arithmetic for f64 {
    fn as_expr(&self) -> Expr {
        Expr::Literal(*self)
    }
}

impl Arithmetic for Parameter {
    fn as_expr(&self) -> Expr {
        Expr::Symbol(SymbolRef::new(
            self.name(),
            self.indices(),
            None,
            self.condition(),
        ))
    }
}

impl Arithmetic for Variable {
    fn as_expr(&self) -> Expr {
        Expr::Symbol(SymbolRef::new(
            self.name(),
            self.indices(),
            self.suffix(),
            self.condition(),
        ))
    }
}

impl Arithmetic for Alias {
    fn as_expr(&self) -> Expr {
        Expr::Symbol(SymbolRef::new(self.name(), &[], None, None))
    }
}

impl<T: Arithmetic + ?Sized> Arithmetic for &T {
    fn as_expr(&self) -> Expr {
        (**self).as_expr()
    }
}

/// Fallible conversion into an expression node. Everything [`Arithmetic`]
/// converts infallibly; equations convert only through a suffix view.
pub trait TryIntoExpr {
    fn try_into_expr(self) -> Result<Expr, ExprError>;
}

// One impl per infallible operand type; a blanket impl over
// `Arithmetic` would collide with the fallible impls below.
macro_rules! impl_try_into_expr {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryIntoExpr for $ty {
                fn try_into_expr(self) -> Result<Expr, ExprError> {
                    Ok(self.as_expr())
                }
            }

            impl TryIntoExpr for &$ty {
                fn try_into_expr(self) -> Result<Expr, ExprError> {
                    Ok(self.as_expr())
                }
            }
        )+
    };
}

impl_try_into_expr!(Expr, f64, Parameter, Variable, Alias);

impl TryIntoExpr for Equation {
    fn try_into_expr(self) -> Result<Expr, ExprError> {
        (&self).try_into_expr()
    }
}

impl TryIntoExpr for &Equation {
    fn try_into_expr(self) -> Result<Expr, ExprError> {
        let suffix = self.suffix().ok_or_else(|| ExprError::BareEquation {
            name: self.name().to_string(),
        })?;
        Ok(Expr::Symbol(SymbolRef::new(
            self.name(),
            self.indices(),
            Some(suffix),
            self.condition(),
        )))
    }
}

// Bare index domains are not arithmetic operands; the failure names the
// offending category so misuse through the free builders is diagnosable.
impl TryIntoExpr for Set {
    fn try_into_expr(self) -> Result<Expr, ExprError> {
        Err(ExprError::UnsupportedOperand { category: "set" })
    }
}

impl TryIntoExpr for &Set {
    fn try_into_expr(self) -> Result<Expr, ExprError> {
        Err(ExprError::UnsupportedOperand { category: "set" })
    }
}

#[cfg(test)]
mod tests {
    use super::{combine, Arithmetic, BinOp, Expr, TryIntoExpr};
    use crate::element::{Equation, Set, Suffix, VarKind, Variable};
    use crate::expr::ExprError;

    #[test]
    fn addition_shields_a_compound_right_operand() {
        let a = Expr::Literal(1.0);
        let b = combine(BinOp::Add, Expr::Literal(2.0), Expr::Literal(3.0));
        let tree = combine(BinOp::Add, a, b);
        match tree {
            Expr::Binary { rhs, .. } => assert!(rhs.is_parenthesized()),
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn addition_leaves_a_multiplicative_right_operand_unshielded() {
        let product = combine(BinOp::Mul, Expr::Literal(2.0), Expr::Literal(3.0));
        let tree = combine(BinOp::Add, Expr::Literal(1.0), product);
        match tree {
            Expr::Binary { rhs, .. } => assert!(!rhs.is_parenthesized()),
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_shields_both_operands() {
        let lhs = combine(BinOp::Add, Expr::Literal(1.0), Expr::Literal(2.0));
        let rhs = combine(BinOp::Sub, Expr::Literal(3.0), Expr::Literal(4.0));
        let tree = combine(BinOp::Mul, lhs, rhs);
        match tree {
            Expr::Binary { lhs, rhs, .. } => {
                assert!(lhs.is_parenthesized());
                assert!(rhs.is_parenthesized());
            }
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn parenthesization_does_not_stick_to_leaves() {
        let leaf = Expr::Literal(7.0).parenthesized();
        assert!(!leaf.is_parenthesized());
    }

    #[test]
    fn bare_equation_is_not_an_operand() {
        let supply = Equation::new("supply");
        let err = (&supply).try_into_expr().unwrap_err();
        assert_eq!(
            err,
            ExprError::BareEquation {
                name: "supply".to_string()
            }
        );
        assert!(supply.m().try_into_expr().is_ok());
    }

    #[test]
    fn variable_reference_carries_suffix_and_indices() {
        let i = Set::new("i", ["a"]);
        let x = Variable::over("x", VarKind::Positive, [&i]);
        match x.l().as_expr() {
            Expr::Symbol(sym) => {
                assert_eq!(sym.name(), "x");
                assert_eq!(sym.suffix(), Some(Suffix::Level));
                assert_eq!(sym.indices().len(), 1);
            }
            other => panic!("expected symbol node, got {other:?}"),
        }
    }
}
