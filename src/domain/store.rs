//! Store contract for link persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::Link;
use crate::error::AppError;

/// Result of an atomic conditional insert.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The code was free and the record was inserted.
    Created(Link),
    /// A record with this code already exists; nothing was written.
    CodeExists,
}

/// Durable mapping from short code to link record.
///
/// Every mutating operation must be atomic at the storage layer:
/// implementations may not decompose them into a read followed by a write
/// visible to concurrent callers. Operations on different codes must never
/// block on each other.
///
/// "Does not exist" is part of the `Ok` domain of each method; `Err` is
/// reserved for transient storage failures that the caller may retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL,
///   single-statement SQL primitives
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process,
///   lock-guarded critical sections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new record only if `code` is unused, in one indivisible
    /// operation. Never overwrites an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failure.
    async fn try_create(
        &self,
        code: &str,
        target: &str,
        now: DateTime<Utc>,
    ) -> Result<CreateOutcome, AppError>;

    /// Atomically increments `clicks` by 1 and sets `last_clicked = now`,
    /// returning the post-update record.
    ///
    /// Returns `Ok(None)` if the code does not exist (e.g. deleted by a
    /// concurrent caller); the increment then has no effect anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failure.
    async fn increment_and_touch(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError>;

    /// Fetches a record by code without touching its counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failure.
    async fn get(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Removes a record. Returns `true` iff a record was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failure.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all records, newest first by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failure.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;
}
