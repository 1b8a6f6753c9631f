//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Provide one stable storage interface per aggregate (employees,
//!   services, appointments) and keep SQL details behind it.
//!
//! # Invariants
//! - Write paths validate candidates before SQL mutations.
//! - Read paths reject corrupt persisted rows with [`RepoError::InvalidData`]
//!   instead of silently dropping them.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::db::DbError;
use crate::scheduling::validation::ValidationError;

pub mod appointment_repo;
pub mod employee_repo;
pub mod service_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-layer failure shared by all repositories.
#[derive(Debug)]
pub enum RepoError {
    /// Candidate rejected before any SQL ran.
    Validation(ValidationError),
    /// Underlying SQLite failure.
    Db(DbError),
    /// Referenced record does not exist.
    NotFound(Uuid),
    /// A persisted row violates a model invariant.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}
