//! Error types for the Oracle dialect
//!
//! Rewriters never fail; these errors come from type resolution,
//! configuration, connection setup and statement execution.

use config::ConfigError;
use thiserror::Error;
use type_mapping::TypeMappingError;

#[derive(Error, Debug)]
pub enum DialectError {
    #[error(transparent)]
    InvalidType(#[from] TypeMappingError),

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Connection error: neither a connection nor a data source is configured")]
    MissingDataSource,

    #[error("Execution error: {0}")]
    Execution(#[source] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
