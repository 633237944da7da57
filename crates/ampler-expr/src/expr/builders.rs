//! Operator builders: free functions for fallible operands, `std::ops`
//! overloads for everything [`Arithmetic`].

use crate::element::{Alias, Parameter, Variable};
use crate::expr::core::{combine, Arithmetic, BinOp, Expr, TryIntoExpr};
use crate::expr::error::ExprError;
use crate::expr::relation::{RelOp, Relation};

/// `lhs + rhs`.
pub fn add(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Expr, ExprError> {
    Ok(combine(BinOp::Add, lhs.try_into_expr()?, rhs.try_into_expr()?))
}

/// `lhs - rhs`.
pub fn sub(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Expr, ExprError> {
    Ok(combine(BinOp::Sub, lhs.try_into_expr()?, rhs.try_into_expr()?))
}

/// `lhs * rhs`.
pub fn mul(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Expr, ExprError> {
    Ok(combine(BinOp::Mul, lhs.try_into_expr()?, rhs.try_into_expr()?))
}

/// `lhs / rhs`.
pub fn div(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Expr, ExprError> {
    Ok(combine(BinOp::Div, lhs.try_into_expr()?, rhs.try_into_expr()?))
}

/// `lhs =e= rhs`.
pub fn eq(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
    Ok(Relation::new(
        lhs.try_into_expr()?,
        RelOp::Eq,
        rhs.try_into_expr()?,
    ))
}

/// `lhs =l= rhs`.
pub fn le(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
    Ok(Relation::new(
        lhs.try_into_expr()?,
        RelOp::Le,
        rhs.try_into_expr()?,
    ))
}

/// `lhs =g= rhs`.
pub fn ge(lhs: impl TryIntoExpr, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
    Ok(Relation::new(
        lhs.try_into_expr()?,
        RelOp::Ge,
        rhs.try_into_expr()?,
    ))
}

impl Expr {
    /// Relate this expression to a right-hand side with `=l=`.
    pub fn le(&self, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
        le(self, rhs)
    }

    /// Relate this expression to a right-hand side with `=g=`.
    pub fn ge(&self, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
        ge(self, rhs)
    }

    /// Relate this expression to a right-hand side with `=e=`.
    pub fn eq(&self, rhs: impl TryIntoExpr) -> Result<Relation, ExprError> {
        eq(self, rhs)
    }
}

// `std::ops` overloads for the infallible operand types. Equations stay
// out: their conversion is fallible, so they go through the free builders.
macro_rules! impl_arith_ops {
    ($ty:ty) => {
        impl<R: Arithmetic> std::ops::Add<R> for $ty {
            type Output = Expr;

            fn add(self, rhs: R) -> Expr {
                combine(BinOp::Add, self.as_expr(), rhs.as_expr())
            }
        }

        impl<R: Arithmetic> std::ops::Sub<R> for $ty {
            type Output = Expr;

            fn sub(self, rhs: R) -> Expr {
                combine(BinOp::Sub, self.as_expr(), rhs.as_expr())
            }
        }

        impl<R: Arithmetic> std::ops::Mul<R> for $ty {
            type Output = Expr;

            fn mul(self, rhs: R) -> Expr {
                combine(BinOp::Mul, self.as_expr(), rhs.as_expr())
            }
        }

        impl<R: Arithmetic> std::ops::Div<R> for $ty {
            type Output = Expr;

            fn div(self, rhs: R) -> Expr {
                combine(BinOp::Div, self.as_expr(), rhs.as_expr())
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Expr;

            fn neg(self) -> Expr {
                combine(BinOp::Mul, Expr::Literal(-1.0), self.as_expr())
            }
        }
    };
}

impl_arith_ops!(Expr);
impl_arith_ops!(&Expr);
impl_arith_ops!(Parameter);
impl_arith_ops!(&Parameter);
impl_arith_ops!(Variable);
impl_arith_ops!(&Variable);
impl_arith_ops!(Alias);
impl_arith_ops!(&Alias);

// Scalar left-hand sides need concrete impls per operand type.
macro_rules! impl_scalar_lhs_ops {
    ($ty:ty) => {
        impl std::ops::Add<$ty> for f64 {
            type Output = Expr;

            fn add(self, rhs: $ty) -> Expr {
                combine(BinOp::Add, Expr::Literal(self), rhs.as_expr())
            }
        }

        impl std::ops::Sub<$ty> for f64 {
            type Output = Expr;

            fn sub(self, rhs: $ty) -> Expr {
                combine(BinOp::Sub, Expr::Literal(self), rhs.as_expr())
            }
        }

        impl std::ops::Mul<$ty> for f64 {
            type Output = Expr;

            fn mul(self, rhs: $ty) -> Expr {
                combine(BinOp::Mul, Expr::Literal(self), rhs.as_expr())
            }
        }

        impl std::ops::Div<$ty> for f64 {
            type Output = Expr;

            fn div(self, rhs: $ty) -> Expr {
                combine(BinOp::Div, Expr::Literal(self), rhs.as_expr())
            }
        }
    };
}

impl_scalar_lhs_ops!(Expr);
impl_scalar_lhs_ops!(&Expr);
impl_scalar_lhs_ops!(Parameter);
impl_scalar_lhs_ops!(&Parameter);
impl_scalar_lhs_ops!(Variable);
impl_scalar_lhs_ops!(&Variable);
impl_scalar_lhs_ops!(Alias);
impl_scalar_lhs_ops!(&Alias);

#[cfg(test)]
mod tests {
    use super::{add, eq, le};
    use crate::element::{Equation, Parameter, Set, VarKind, Variable};
    use crate::expr::{BinOp, Expr, ExprError, RelOp};

    #[test]
    fn operators_build_binary_nodes() {
        let i = Set::new("i", ["a"]);
        let c = Parameter::over("c", [&i]);
        let x = Variable::over("x", VarKind::Positive, [&i]);

        let term = &c * &x;
        match term {
            Expr::Binary { op, .. } => assert_eq!(op, BinOp::Mul),
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn scalar_left_hand_side() {
        let x = Variable::new("x", VarKind::Free);
        let shifted = 2.0 + &x;
        match shifted {
            Expr::Binary { op, lhs, .. } => {
                assert_eq!(op, BinOp::Add);
                assert!(matches!(*lhs, Expr::Literal(v) if v == 2.0));
            }
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn negation_multiplies_by_minus_one() {
        let x = Variable::new("x", VarKind::Free);
        let negated = -&x;
        match negated {
            Expr::Binary { op, lhs, .. } => {
                assert_eq!(op, BinOp::Mul);
                assert!(matches!(*lhs, Expr::Literal(v) if v == -1.0));
            }
            other => panic!("expected binary node, got {other:?}"),
        }
    }

    #[test]
    fn free_builders_accept_equation_suffix_views() {
        let supply = Equation::new("supply");
        let shifted = add(supply.m(), 1.0).expect("suffix view is an operand");
        assert!(matches!(shifted, Expr::Binary { .. }));

        let err = add(&supply, 1.0).unwrap_err();
        assert_eq!(
            err,
            ExprError::BareEquation {
                name: "supply".to_string()
            }
        );
    }

    #[test]
    fn sets_are_not_arithmetic_operands() {
        let i = Set::new("i", ["a"]);
        let err = add(&i, 1.0).unwrap_err();
        assert_eq!(err, ExprError::UnsupportedOperand { category: "set" });
    }

    #[test]
    fn relation_builders_carry_the_operator() {
        let x = Variable::new("x", VarKind::Free);
        assert_eq!(le(&x, 10.0).expect("relation").op(), RelOp::Le);
        assert_eq!(eq(&x, 0.0).expect("relation").op(), RelOp::Eq);
    }
}
