use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use bookshelf_request::{
    error::SqlResult,
    sql::{SqlSelectBuilder, SqlSelectStatement},
};
use deadpool_postgres::Pool;
use itertools::Itertools;
use tokio_postgres::Row;
use tracing::debug;

use crate::{
    book::{
        filter::BookFilter,
        repository::{BookRecord, BookRepository},
    },
    error::AppResult,
};

/// `PostgreSQL` implementation of the book repository.
pub struct PostgresBookRepository {
    pool: Pool,
}

impl PostgresBookRepository {
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl Debug for PostgresBookRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresBookRepository")
            .field("pool", &self.pool.status())
            .finish()
    }
}

/// Builds the selection for a book filter.
///
/// The author condition comes before the search condition. Without any
/// filter the whole relation is selected, with no implicit cap.
pub fn select_statement(filter: &BookFilter) -> SqlResult<SqlSelectStatement> {
    let mut builder = SqlSelectBuilder::new("books");
    builder.set_columns(["title", "author_id"]);
    if let Some(author_ids) = filter.author_ids() {
        builder.add_any("author_id", author_ids.iter().copied());
    }
    if let Some(search) = filter.search() {
        builder.add_contains("title", search);
    }
    if let Some(limit) = filter.limit() {
        builder.set_limit(limit);
    }
    builder.build()
}

fn map_row(row: &Row) -> AppResult<BookRecord> {
    Ok(BookRecord {
        title: row.try_get("title")?,
        author_id: row.try_get("author_id")?,
    })
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn select_filtered(&self, filter: &BookFilter) -> AppResult<Vec<BookRecord>> {
        let statement = select_statement(filter)?;
        debug!(
            sql = %statement.sql,
            arguments = %statement.arguments.iter().join(", "),
            "selecting books"
        );

        let client = self.pool.get().await?;
        let rows = client
            .query(statement.sql.as_str(), &statement.get_sql_params())
            .await?;

        rows.iter().map(map_row).collect()
    }
}
