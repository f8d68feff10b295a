use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{book::filter::BookFilter, error::AppResult};

/// In-memory repository implementation.
pub mod memory;

/// `PostgreSQL` repository implementation.
pub mod postgres;

/// Book row as selected from the `books` relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Title of the book
    pub title: String,
    /// Reference to the author; the author may no longer exist
    pub author_id: i64,
}

/// Repository trait for book data operations.
#[async_trait]
pub trait BookRepository: Debug {
    /// Selects book records matching the filter, in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection fails.
    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookRecord>>;
}

/// Thread-safe shared reference to a book repository.
pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;
