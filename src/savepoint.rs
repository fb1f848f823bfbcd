//! Transaction savepoints
//!
//! Savepoint names are used as given; uniqueness and nesting are up to the
//! caller. Errors from the executor are returned unchanged.

use crate::connection::SqlExecutor;
use crate::errors::DialectError;

/// Create a savepoint in the active transaction
pub async fn save_point<E>(tx: &mut E, name: &str) -> Result<(), DialectError>
where
    E: SqlExecutor + ?Sized,
{
    tracing::debug!("[SAVEPOINT] {}", name);
    tx.execute_sql(&format!("SAVEPOINT {}", name))
        .await
        .map_err(DialectError::Execution)?;
    Ok(())
}

/// Roll the active transaction back to a savepoint
pub async fn rollback_to<E>(tx: &mut E, name: &str) -> Result<(), DialectError>
where
    E: SqlExecutor + ?Sized,
{
    tracing::debug!("[ROLLBACK TO SAVEPOINT] {}", name);
    tx.execute_sql(&format!("ROLLBACK TO SAVEPOINT {}", name))
        .await
        .map_err(DialectError::Execution)?;
    Ok(())
}
