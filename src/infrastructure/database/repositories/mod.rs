//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod customer_repository;
pub mod driver_repository;
pub mod feedback_repository;
pub mod payment_method_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod vehicle_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::{DomainError, DomainResult};

/// Unique-key violations are conflicts; everything else means the store failed.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::Conflict(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => DomainError::Conflict(detail),
        _ => DomainError::StorageUnavailable(e.to_string()),
    }
}

pub(crate) fn ensure_deleted(entity: &'static str, id: i64, rows_affected: u64) -> DomainResult<()> {
    if rows_affected == 0 {
        return Err(DomainError::not_found(entity, id));
    }
    Ok(())
}
