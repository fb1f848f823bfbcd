//! Query builder - host-side statement model for dialect rewriting
//!
//! This crate provides the structures a dialect consumes while a statement
//! is compiled: bind values, the predicate tree, clause values, the
//! append-only statement buffer and the extension traits a dialect implements.

pub mod clause;
pub mod dialect;
pub mod expression;
pub mod statement;
pub mod value;

pub use clause::{Clause, ClauseKind, Limit, OrderBy, RowLimit, SortOrder, Where};
pub use dialect::{ClauseBuilder, ClauseBuilders, Dialect};
pub use expression::{Expression, Operator};
pub use statement::{Schema, Statement};
pub use value::Value;
