use std::collections::HashMap;

use tracing::instrument;

use crate::{author::repository::AuthorRepositoryArc, error::AppResult, model::Author};

#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        AuthorQueryManager { author_repository }
    }

    /// Looks up a single author.
    ///
    /// A missing author is `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn query_single(&self, id: i64) -> AppResult<Option<Author>> {
        Ok(self.author_repository.select(id).await?.map(Author::from))
    }

    /// Looks up all of the given authors at once, keyed by ID.
    ///
    /// Missing authors are absent from the map.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn query_batch(&self, ids: &[i64]) -> AppResult<HashMap<i64, Author>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(self
            .author_repository
            .select_multiple(ids)
            .await?
            .into_iter()
            .map(|record| (record.id, Author::from(record)))
            .collect())
    }
}
