//! Fixtures shared by the service tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    author::{
        query_manager::AuthorQueryManager,
        repository::{AuthorRecord, AuthorRepository, memory::MemoryAuthorRepository},
    },
    book::{
        filter::BookFilter,
        query_manager::BookQueryManager,
        repository::{BookRecord, BookRepository, memory::MemoryBookRepository},
    },
    catalog,
    config::AuthorLoading,
    error::{AppError, AppResult},
    graphql::{BookshelfSchema, build_schema},
};

pub use crate::catalog::books;

pub fn author_repository() -> Arc<MemoryAuthorRepository> {
    Arc::new(catalog::author_repository())
}

pub fn book_repository() -> Arc<MemoryBookRepository> {
    Arc::new(catalog::book_repository())
}

/// Schema over the in-memory catalog.
pub fn schema() -> BookshelfSchema {
    build_schema(BookQueryManager::new(
        book_repository(),
        AuthorQueryManager::new(author_repository()),
        AuthorLoading::Sequential,
    ))
}

fn unavailable() -> AppError {
    AppError::Internal("database unavailable".into())
}

/// Book repository whose selections always fail.
#[derive(Debug, Default)]
pub struct FailingBookRepository;

#[async_trait]
impl BookRepository for FailingBookRepository {
    async fn select_filtered(&self, _filter: &BookFilter) -> AppResult<Vec<BookRecord>> {
        Err(unavailable())
    }
}

/// Author repository that counts lookups and can fail on a given author.
#[derive(Debug)]
pub struct CountingAuthorRepository {
    inner: MemoryAuthorRepository,
    fail_on: Option<i64>,
    selects: AtomicUsize,
    batch_selects: AtomicUsize,
}

impl CountingAuthorRepository {
    pub fn new() -> Self {
        Self {
            inner: catalog::author_repository(),
            fail_on: None,
            selects: AtomicUsize::new(0),
            batch_selects: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(id: i64) -> Self {
        Self {
            fail_on: Some(id),
            ..Self::new()
        }
    }

    pub fn selects(&self) -> usize {
        self.selects.load(Ordering::SeqCst)
    }

    pub fn batch_selects(&self) -> usize {
        self.batch_selects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorRepository for CountingAuthorRepository {
    async fn select(&self, id: i64) -> AppResult<Option<AuthorRecord>> {
        self.selects.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(id) {
            return Err(unavailable());
        }
        self.inner.select(id).await
    }

    async fn select_multiple(&self, ids: &[i64]) -> AppResult<Vec<AuthorRecord>> {
        self.batch_selects.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.is_some_and(|id| ids.contains(&id)) {
            return Err(unavailable());
        }
        self.inner.select_multiple(ids).await
    }
}
