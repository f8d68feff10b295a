//! GraphQL query resolvers.

use async_graphql::{Context, Object, Result};

use crate::{
    book::{filter::BookFilter, query_manager::BookQueryManager},
    error::AppError,
    model::Book,
};

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List books, optionally narrowed by author, title substring and count.
    async fn books(
        &self,
        ctx: &Context<'_>,
        author_ids: Option<Vec<i32>>,
        search: Option<String>,
        #[graphql(validator(minimum = 0))] limit: Option<i32>,
    ) -> Result<Vec<Book>> {
        let book_query_manager = ctx.data::<BookQueryManager>()?;
        let filter = BookFilter::new(
            author_ids.map(|author_ids| author_ids.into_iter().map(i64::from).collect()),
            search,
            limit.and_then(|limit| u32::try_from(limit).ok()),
        );

        book_query_manager
            .query_list(&filter)
            .await
            .map_err(AppError::into_graphql_error)
    }
}
