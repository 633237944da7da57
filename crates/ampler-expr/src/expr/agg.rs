//! Aggregations over index domains.

use crate::element::IndexSet;
use crate::expr::core::{Condition, Expr};
use crate::expr::error::ExprError;
use crate::expr::TryIntoExpr;

/// Aggregation function, rendered with its GAMS keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggFunc {
    Sum,
    Prod,
    Smax,
}

impl AggFunc {
    pub fn as_str(self) -> &'static str {
        match self {
            AggFunc::Sum => "sum",
            AggFunc::Prod => "prod",
            AggFunc::Smax => "smax",
        }
    }
}

/// An aggregation call: a body folded over one or more index sets, with
/// an optional filter on the domain.
#[derive(Debug, Clone)]
pub struct AggCall {
    func: AggFunc,
    indices: Vec<IndexSet>,
    condition: Option<Condition>,
    body: Box<Expr>,
}

impl AggCall {
    pub fn func(&self) -> AggFunc {
        self.func
    }

    pub fn indices(&self) -> &[IndexSet] {
        &self.indices
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}

fn aggregate<I, T>(
    func: AggFunc,
    indices: I,
    condition: Option<Condition>,
    body: impl TryIntoExpr,
) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    let indices: Vec<IndexSet> = indices.into_iter().map(Into::into).collect();
    if indices.is_empty() {
        return Err(ExprError::EmptyDomain {
            func: func.as_str(),
        });
    }
    Ok(Expr::Call(AggCall {
        func,
        indices,
        condition,
        body: Box::new(body.try_into_expr()?),
    }))
}

/// Sum of the body over the given index sets.
pub fn sum<I, T>(indices: I, body: impl TryIntoExpr) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Sum, indices, None, body)
}

/// Sum restricted to domain members satisfying the condition.
pub fn sum_cond<I, T>(
    indices: I,
    condition: impl Into<Condition>,
    body: impl TryIntoExpr,
) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Sum, indices, Some(condition.into()), body)
}

/// Product of the body over the given index sets.
pub fn prod<I, T>(indices: I, body: impl TryIntoExpr) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Prod, indices, None, body)
}

/// Product restricted to domain members satisfying the condition.
pub fn prod_cond<I, T>(
    indices: I,
    condition: impl Into<Condition>,
    body: impl TryIntoExpr,
) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Prod, indices, Some(condition.into()), body)
}

/// Maximum of the body over the given index sets.
pub fn smax<I, T>(indices: I, body: impl TryIntoExpr) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Smax, indices, None, body)
}

/// Maximum restricted to domain members satisfying the condition.
pub fn smax_cond<I, T>(
    indices: I,
    condition: impl Into<Condition>,
    body: impl TryIntoExpr,
) -> Result<Expr, ExprError>
where
    I: IntoIterator<Item = T>,
    T: Into<IndexSet>,
{
    aggregate(AggFunc::Smax, indices, Some(condition.into()), body)
}

#[cfg(test)]
mod tests {
    use super::{smax, sum, sum_cond, AggFunc};
    use crate::element::{Parameter, Set, VarKind, Variable};
    use crate::expr::{Expr, ExprError};

    #[test]
    fn sum_over_one_index() {
        let i = Set::new("i", ["a", "b"]);
        let x = Variable::over("x", VarKind::Positive, [&i]);
        let total = sum([&i], &x).expect("aggregation");
        match total {
            Expr::Call(call) => {
                assert_eq!(call.func(), AggFunc::Sum);
                assert_eq!(call.indices().len(), 1);
                assert!(call.condition().is_none());
            }
            other => panic!("expected call node, got {other:?}"),
        }
    }

    #[test]
    fn empty_domain_is_rejected() {
        let x = Variable::new("x", VarKind::Free);
        let err = sum(Vec::<Set>::new(), &x).unwrap_err();
        assert_eq!(err, ExprError::EmptyDomain { func: "sum" });
        let err = smax(Vec::<Set>::new(), &x).unwrap_err();
        assert_eq!(err, ExprError::EmptyDomain { func: "smax" });
    }

    #[test]
    fn conditional_sum_carries_the_filter() {
        let i = Set::new("i", ["a", "b"]);
        let active = Parameter::over("active", [&i]);
        let x = Variable::over("x", VarKind::Positive, [&i]);
        let total = sum_cond([&i], &active, &x).expect("aggregation");
        match total {
            Expr::Call(call) => assert!(call.condition().is_some()),
            other => panic!("expected call node, got {other:?}"),
        }
    }
}
