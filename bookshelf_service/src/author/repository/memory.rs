use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    author::repository::{AuthorRecord, AuthorRepository},
    error::AppResult,
};

/// In-memory implementation of the author repository.
#[derive(Debug)]
pub struct MemoryAuthorRepository {
    authors: Arc<RwLock<HashMap<i64, AuthorRecord>>>,
}

impl MemoryAuthorRepository {
    /// Creates a new memory author repository with initial data.
    pub fn with_data(authors: Vec<AuthorRecord>) -> Self {
        Self {
            authors: Arc::new(RwLock::new(
                authors
                    .into_iter()
                    .map(|author| (author.id, author))
                    .collect(),
            )),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn select(&self, id: i64) -> AppResult<Option<AuthorRecord>> {
        let authors = self.authors.read().await;
        Ok(authors.get(&id).cloned())
    }

    async fn select_multiple(&self, ids: &[i64]) -> AppResult<Vec<AuthorRecord>> {
        let authors = self.authors.read().await;
        Ok(authors
            .values()
            .filter(|author| ids.contains(&author.id))
            .cloned()
            .collect())
    }
}
