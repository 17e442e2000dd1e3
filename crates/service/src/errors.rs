use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("key already exists: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(key: &str) -> Self { Self::NotFound(format!("key {} not found", key)) }

    /// Map an insert failure: only a unique/primary-key violation is a conflict.
    pub fn from_insert(key: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(key.to_string()),
            _ => Self::Db(err.to_string()),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_insert_errors_stay_db_errors() {
        let err = ServiceError::from_insert("a", DbErr::Custom("disk I/O error".into()));
        assert!(matches!(err, ServiceError::Db(msg) if msg.contains("disk I/O error")));
    }

    #[test]
    fn display_messages() {
        assert_eq!(ServiceError::not_found("a").to_string(), "not found: key a not found");
        assert_eq!(ServiceError::Conflict("a".into()).to_string(), "key already exists: a");
    }
}
