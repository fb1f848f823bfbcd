//! Clause rewriters
//!
//! Oracle-specific renderings of the WHERE and LIMIT clauses, installed as
//! clause builders by [`crate::OracleDialect`].

pub mod limit;
pub mod membership;
pub mod where_clause;

pub use limit::rewrite_limit;
pub use membership::{expand_membership, MAX_IN_LIST_SIZE};
pub use where_clause::rewrite_where;
