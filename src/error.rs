use sea_orm::{
    DbErr, RuntimeErr, SqlErr,
    sqlx::{self, error::ErrorKind},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] DbErr),

    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] DbErr),

    #[error("storage error: {0}")]
    Storage(#[source] DbErr),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
            return Self::StorageUnavailable(err);
        }
        if is_constraint_violation(&err) {
            return Self::ConstraintViolation(err);
        }
        Self::Storage(err)
    }
}

fn is_constraint_violation(err: &DbErr) -> bool {
    if matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_))
    ) {
        return true;
    }
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => matches!(
            e.kind(),
            ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
        ),
        _ => false,
    }
}

pub type AppResult<T> = Result<T, AppError>;
