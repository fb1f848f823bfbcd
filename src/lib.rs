//! # Oracle Dialect
//!
//! Oracle support for the query builder: WHERE and LIMIT clause rewriting,
//! column type mapping, savepoints and connection setup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oracle_dialect::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DataSource::new(
//!         "localhost".to_string(), 1521, "XEPDB1".to_string(),
//!         "scott".to_string(), "tiger".to_string(),
//!     );
//!     let db = Dialector::new(DialectConfig::from_data_source(source))
//!         .initialize()
//!         .await?;
//!
//!     let mut stmt = db.statement("users");
//!     stmt.add_clause(Where::new(vec![Expression::eq("active", true)]));
//!     stmt.add_clause(Limit::new().with_limit(10i64));
//!     stmt.write_str("SELECT * FROM users");
//!     stmt.build(&ClauseKind::SELECT_ORDER);
//!
//!     println!("{}", stmt.explain());
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod connection;
pub mod core;
pub mod dialect;
pub mod errors;
pub mod explain;
pub mod migration;
pub mod prelude;
pub mod rewrite;
pub mod savepoint;

pub use crate::core::{Database, Dialector};
pub use connection::SqlExecutor;
pub use dialect::OracleDialect;
pub use errors::DialectError;

// Re-export centralized config
pub use config::{AppConfig, DataSource, DialectConfig};

// Re-export internal crates used in the public API
pub use config;
pub use query_builder;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
