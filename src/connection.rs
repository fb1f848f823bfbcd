//! Statement execution boundary
//!
//! The dialect never talks to the wire itself. Everything it executes
//! (savepoints, DDL) goes through [`SqlExecutor`], implemented here for
//! sqlx's driver-agnostic pool and transactions.

use async_trait::async_trait;
use sqlx::{Any, AnyPool, Transaction};

/// Executes raw SQL against an open connection or transaction
#[async_trait]
pub trait SqlExecutor: Send {
    /// Execute `sql`, returning the number of affected rows
    async fn execute_sql(&mut self, sql: &str) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl SqlExecutor for AnyPool {
    async fn execute_sql(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(sql).execute(&*self).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl<'c> SqlExecutor for Transaction<'c, Any> {
    async fn execute_sql(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(sql).execute(&mut **self).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl<E> SqlExecutor for Box<E>
where
    E: SqlExecutor + ?Sized,
{
    async fn execute_sql(&mut self, sql: &str) -> Result<u64, sqlx::Error> {
        (**self).execute_sql(sql).await
    }
}
