//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits
//! so users can import everything they need with a single use statement.

pub use crate::core::{Database, Dialector};
pub use crate::connection::SqlExecutor;
pub use crate::dialect::OracleDialect;
pub use crate::errors::DialectError;
pub use crate::savepoint::{rollback_to, save_point};

pub use config::{AppConfig, DataSource, DialectConfig};

pub use query_builder::{
    Clause, ClauseBuilder, ClauseBuilders, ClauseKind, Dialect, Expression, Limit, OrderBy,
    RowLimit, Schema, SortOrder, Statement, Value, Where,
};

pub use type_mapping::{DataType, FieldDescriptor, TypeMappingConfig, TypeMappingError};

pub use async_trait::async_trait;
