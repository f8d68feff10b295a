//! GraphQL schema and HTTP transport.

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::book::query_manager::BookQueryManager;

pub mod query;
pub mod server;

use query::QueryRoot;

pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the GraphQL schema around the given query manager.
pub fn build_schema(book_query_manager: BookQueryManager) -> BookshelfSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(book_query_manager)
        .finish()
}
