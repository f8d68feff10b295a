//! Sample catalog served by the in-memory backend.

use crate::{
    author::repository::{AuthorRecord, memory::MemoryAuthorRepository},
    book::repository::{BookRecord, memory::MemoryBookRepository},
};

pub fn authors() -> Vec<AuthorRecord> {
    [
        (1, "Ursula K. Le Guin"),
        (2, "Stanisław Lem"),
        (3, "Octavia E. Butler"),
    ]
    .into_iter()
    .map(|(id, name)| AuthorRecord {
        id,
        name: name.into(),
    })
    .collect()
}

/// Books in store order. The last one references author 9, which does not exist.
pub fn books() -> Vec<BookRecord> {
    [
        ("The Dispossessed", 1),
        ("Solaris", 2),
        ("FooBar Chronicles", 3),
        ("The Left Hand of Darkness", 1),
        ("Memoirs Found in a Bathtub", 2),
        ("Kindred", 3),
        ("Foo Fighters Biography", 9),
    ]
    .into_iter()
    .map(|(title, author_id)| BookRecord {
        title: title.into(),
        author_id,
    })
    .collect()
}

pub fn author_repository() -> MemoryAuthorRepository {
    MemoryAuthorRepository::with_data(authors())
}

pub fn book_repository() -> MemoryBookRepository {
    MemoryBookRepository::with_data(books())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        author::query_manager::AuthorQueryManager,
        book::{filter::BookFilter, query_manager::BookQueryManager},
        config::AuthorLoading,
    };

    #[tokio::test]
    async fn serves_sample_catalog() {
        let manager = BookQueryManager::new(
            Arc::new(book_repository()),
            AuthorQueryManager::new(Arc::new(author_repository())),
            AuthorLoading::Sequential,
        );

        let listed = manager.query_list(&BookFilter::default()).await.unwrap();
        assert_eq!(listed.len(), books().len());
        assert_eq!(
            listed.iter().filter(|book| book.author.is_some()).count(),
            listed.len() - 1
        );
    }
}
