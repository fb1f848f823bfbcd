//! Dialect initialization
//!
//! This module contains [`Dialector`], which turns configuration into a
//! ready [`Database`]: an open connection, the Oracle dialect and its
//! registered clause builders.

use std::sync::Arc;

use config::DialectConfig;
use query_builder::{ClauseBuilders, Dialect, Statement};
use sqlx::any::AnyPoolOptions;
use type_mapping::{FieldDescriptor, TypeMappingConfig};

use crate::connection::SqlExecutor;
use crate::dialect::OracleDialect;
use crate::errors::DialectError;
use crate::savepoint;

/// Entry point configuring the Oracle dialect
pub struct Dialector {
    config: DialectConfig,
    conn: Option<Box<dyn SqlExecutor>>,
}

impl Dialector {
    /// Dialector connecting to `dsn`
    pub fn open(dsn: impl Into<String>) -> Self {
        Self::new(DialectConfig::from_dsn(dsn))
    }

    pub fn new(config: DialectConfig) -> Self {
        Self { config, conn: None }
    }

    /// Dialector reusing an already open connection
    pub fn with_connection<E>(config: DialectConfig, conn: E) -> Self
    where
        E: SqlExecutor + 'static,
    {
        Self {
            config,
            conn: Some(Box::new(conn)),
        }
    }

    pub fn name(&self) -> &'static str {
        OracleDialect.name()
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Open the connection and install the dialect's clause builders.
    ///
    /// A connection passed to [`Dialector::with_connection`] is used as is.
    /// Otherwise the configured DSN (or data source URL) is opened through
    /// sqlx's `Any` driver registry.
    pub async fn initialize(self) -> Result<Database, DialectError> {
        let dialect = OracleDialect::new();
        let type_mapping = TypeMappingConfig::new(self.config.default_string_size);

        let executor: Box<dyn SqlExecutor> = match self.conn {
            Some(conn) => {
                tracing::debug!("Using provided connection for {}", dialect.name());
                conn
            }
            None => {
                let dsn = self
                    .config
                    .resolved_dsn()?
                    .ok_or(DialectError::MissingDataSource)?;
                sqlx::any::install_default_drivers();
                let pool = AnyPoolOptions::new()
                    .connect(&dsn)
                    .await
                    .map_err(DialectError::Connection)?;
                tracing::info!("Connected {} data source", dialect.name());
                Box::new(pool)
            }
        };

        let mut clause_builders = ClauseBuilders::new();
        clause_builders.extend(dialect.clause_builders());

        Ok(Database {
            executor,
            dialect: Arc::new(dialect),
            clause_builders,
            type_mapping,
        })
    }
}

/// An initialized Oracle connection with its dialect
pub struct Database {
    executor: Box<dyn SqlExecutor>,
    dialect: Arc<OracleDialect>,
    clause_builders: ClauseBuilders,
    type_mapping: TypeMappingConfig,
}

impl Database {
    pub fn dialect(&self) -> &OracleDialect {
        &self.dialect
    }

    pub fn clause_builders(&self) -> &ClauseBuilders {
        &self.clause_builders
    }

    pub fn type_mapping(&self) -> &TypeMappingConfig {
        &self.type_mapping
    }

    /// New statement compiled with this database's dialect and clause builders
    pub fn statement(&self, table: &str) -> Statement {
        Statement::new(table, self.dialect.clone(), self.clause_builders.clone())
    }

    /// Column type for a field under this database's configuration
    pub fn data_type_of(&self, field: &mut FieldDescriptor) -> Result<String, DialectError> {
        Ok(self.dialect.data_type_of(field, &self.type_mapping)?)
    }

    /// Execute raw SQL on the underlying connection
    pub async fn exec(&mut self, sql: &str) -> Result<u64, DialectError> {
        self.executor
            .execute_sql(sql)
            .await
            .map_err(DialectError::Execution)
    }

    pub async fn save_point(&mut self, name: &str) -> Result<(), DialectError> {
        savepoint::save_point(self.executor.as_mut(), name).await
    }

    pub async fn rollback_to(&mut self, name: &str) -> Result<(), DialectError> {
        savepoint::rollback_to(self.executor.as_mut(), name).await
    }

    pub fn executor_mut(&mut self) -> &mut dyn SqlExecutor {
        self.executor.as_mut()
    }
}
