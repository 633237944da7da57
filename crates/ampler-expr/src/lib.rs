//! Symbolic elements and expression trees for algebraic model building.
//!
//! - `element` — sets, aliases, parameters, variables, equations
//! - `expr`    — expression trees, operator builders, aggregations
//! - `render`  — canonical textual serialization

pub mod element;
pub mod expr;
pub mod render;

pub use element::{
    Alias, DenseValues, ElementError, Equation, IndexSet, Parameter, Set, SetMembers, Suffix,
    VarKind, Variable,
};
pub use expr::{
    add, div, eq, ge, le, mul, prod, prod_cond, smax, smax_cond, sub, sum, sum_cond, AggFunc,
    Arithmetic, BinOp, Condition, Expr, ExprError, RelOp, Relation, SymbolRef, TryIntoExpr,
};
pub use render::{RenderOptions, Renderer};
