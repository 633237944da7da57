//! Relational expressions: an expression pair joined by a GAMS-style
//! relational operator.

use crate::expr::core::Expr;
use crate::expr::error::ExprError;

/// Relational operator, rendered with its GAMS token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Le,
    Ge,
}

impl RelOp {
    pub fn token(self) -> &'static str {
        match self {
            RelOp::Eq => "=e=",
            RelOp::Le => "=l=",
            RelOp::Ge => "=g=",
        }
    }

    /// Parse a relational token.
    pub fn from_token(token: &str) -> Result<Self, ExprError> {
        match token {
            "=e=" => Ok(RelOp::Eq),
            "=l=" => Ok(RelOp::Le),
            "=g=" => Ok(RelOp::Ge),
            other => Err(ExprError::InvalidOperator {
                token: other.to_string(),
            }),
        }
    }
}

/// A relation between two expressions, the body of an equation definition.
#[derive(Debug, Clone)]
pub struct Relation {
    lhs: Expr,
    op: RelOp,
    rhs: Expr,
}

impl Relation {
    pub fn new(lhs: Expr, op: RelOp, rhs: Expr) -> Relation {
        Relation { lhs, op, rhs }
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn op(&self) -> RelOp {
        self.op
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}
