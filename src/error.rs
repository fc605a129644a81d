//! Error taxonomy for the storage core.
//!
//! Absent rows are values (`Option::None`, zero rows affected), never
//! errors. Store errors the core does not specifically recognize propagate
//! unchanged inside [`StoreError::Database`].

use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the registries and the dedup ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness violation on an insert where uniqueness is intended,
    /// e.g. a duplicate account or a repeated delivery receipt.
    #[error("record already exists")]
    Conflict(#[source] DbErr),

    /// Connectivity or pool-acquire failure from the underlying store.
    /// Eligible for caller-level retry with backoff.
    #[error("store temporarily unavailable")]
    Transient(#[source] DbErr),

    /// A write affected a row count the operation does not allow.
    #[error("expected exactly one row to be affected, {affected} were")]
    InvariantViolation { affected: u64 },

    /// Any other store error, unchanged.
    #[error(transparent)]
    Database(DbErr),
}

pub type Result<T> = std::result::Result<T, StoreError>;

fn is_unique_violation(error: &DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_UNIQUE: &str = "23505";
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        if code_str == PG_UNIQUE || SQLITE_DUPLICATE_CODES.contains(&code_str) {
            return true;
        }
    }

    false
}

fn is_transient(error: &DbErr) -> bool {
    matches!(error, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

impl From<DbErr> for StoreError {
    fn from(error: DbErr) -> Self {
        if is_unique_violation(&error) {
            StoreError::Conflict(error)
        } else if is_transient(&error) {
            StoreError::Transient(error)
        } else {
            StoreError::Database(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn connection_errors_classify_as_transient() {
        let err: StoreError =
            DbErr::Conn(RuntimeErr::Internal("connection refused".to_string())).into();
        assert!(matches!(err, StoreError::Transient(_)));
    }

    #[test]
    fn unrecognized_errors_pass_through() {
        let err: StoreError =
            DbErr::Exec(RuntimeErr::Internal("syntax error".to_string())).into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
