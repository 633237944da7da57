//! Expression trees for algebraic model building.
//!
//! - `core`     — Expr tree, symbol references, operand traits
//! - `builders` — operator builders and `std::ops` overloads
//! - `relation` — relational expressions (`=e=`, `=l=`, `=g=`)
//! - `agg`      — sum/prod/smax aggregations
//! - `error`    — expression construction errors

pub mod agg;
pub mod builders;
pub mod core;
pub mod error;
pub mod relation;

pub use agg::{prod, prod_cond, smax, smax_cond, sum, sum_cond, AggCall, AggFunc};
pub use builders::{add, div, eq, ge, le, mul, sub};
pub use core::{Arithmetic, BinOp, Condition, Expr, SymbolRef, TryIntoExpr};
pub use error::ExprError;
pub use relation::{RelOp, Relation};
