use itertools::Itertools;
use tracing::{debug, instrument};

use crate::{
    author::query_manager::AuthorQueryManager,
    book::{
        filter::BookFilter,
        repository::{BookRecord, BookRepositoryArc},
    },
    config::AuthorLoading,
    error::AppResult,
    model::Book,
};

#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
    author_query_manager: AuthorQueryManager,
    author_loading: AuthorLoading,
}

impl BookQueryManager {
    pub fn new(
        book_repository: BookRepositoryArc,
        author_query_manager: AuthorQueryManager,
        author_loading: AuthorLoading,
    ) -> Self {
        BookQueryManager {
            book_repository,
            author_query_manager,
            author_loading,
        }
    }

    /// Lists books matching the filter, each with its author resolved.
    ///
    /// Books keep the order they were selected in. Any data access failure
    /// fails the whole listing; no partial list is returned.
    #[instrument(skip(self))]
    pub async fn query_list(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let records = self.book_repository.select_filtered(filter).await?;
        debug!(count = records.len(), "selected books");

        match self.author_loading {
            AuthorLoading::Sequential => self.resolve_sequential(records).await,
            AuthorLoading::Batched => self.resolve_batched(records).await,
        }
    }

    async fn resolve_sequential(&self, records: Vec<BookRecord>) -> AppResult<Vec<Book>> {
        let mut books = Vec::with_capacity(records.len());
        for record in records {
            let author = self
                .author_query_manager
                .query_single(record.author_id)
                .await?;
            books.push(Book {
                title: record.title,
                author,
            });
        }
        Ok(books)
    }

    async fn resolve_batched(&self, records: Vec<BookRecord>) -> AppResult<Vec<Book>> {
        let author_ids: Vec<_> = records.iter().map(|record| record.author_id).unique().collect();
        let authors = self.author_query_manager.query_batch(&author_ids).await?;

        Ok(records
            .into_iter()
            .map(|record| Book {
                author: authors.get(&record.author_id).cloned(),
                title: record.title,
            })
            .collect())
    }
}
