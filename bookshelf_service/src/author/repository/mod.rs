use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::error::AppResult;

/// In-memory repository implementation.
pub mod memory;

/// `PostgreSQL` repository implementation.
pub mod postgres;

/// Author row as stored in the `authors` relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Primary identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Repository trait for author lookups.
#[async_trait]
pub trait AuthorRepository: Debug {
    /// Selects an author record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    ///
    /// # Returns
    ///
    /// Returns the author record if found, `None` otherwise.
    async fn select(&self, id: i64) -> AppResult<Option<AuthorRecord>>;

    /// Selects the author records matching any of the given IDs.
    ///
    /// IDs without a record are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_multiple(&self, ids: &[i64]) -> AppResult<Vec<AuthorRecord>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;
