use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    book::{
        filter::BookFilter,
        repository::{BookRecord, BookRepository},
    },
    error::AppResult,
};

/// In-memory implementation of the book repository.
///
/// Records keep the order they were given in, which is also the selection order.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<Vec<BookRecord>>>,
}

impl MemoryBookRepository {
    /// Creates a new memory book repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books to populate the repository with
    pub fn with_data(books: Vec<BookRecord>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookRecord>> {
        let books = self.books.read().await;
        let limit = filter
            .limit()
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(books
            .iter()
            .filter(|book| filter.matches(&book.title, book.author_id))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author_id: i64) -> BookRecord {
        BookRecord {
            title: title.into(),
            author_id,
        }
    }

    #[tokio::test]
    async fn it_works() {
        let repository = MemoryBookRepository::with_data(vec![
            book("FooBar", 1),
            book("bar", 2),
            book("The Foo", 3),
            book("foo again", 1),
        ]);

        let all = repository
            .select_filtered(&BookFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].title, "foo again");

        let titles: Vec<_> = repository
            .select_filtered(&BookFilter::default().with_search("foo"))
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(titles, vec!["FooBar", "The Foo", "foo again"]);

        let limited = repository
            .select_filtered(
                &BookFilter::default()
                    .with_author_ids([1, 3])
                    .with_search("foo")
                    .with_limit(2),
            )
            .await
            .unwrap();
        assert_eq!(limited, vec![book("FooBar", 1), book("The Foo", 3)]);
    }
}
