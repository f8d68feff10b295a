use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use bookshelf_request::{
    error::SqlResult,
    sql::{SqlSelectBuilder, SqlSelectStatement},
};
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tracing::debug;

use crate::{
    author::repository::{AuthorRecord, AuthorRepository},
    error::AppResult,
};

const TABLE: &str = "authors";
const COLUMNS: [&str; 2] = ["id", "name"];

/// `PostgreSQL` implementation of the author repository.
pub struct PostgresAuthorRepository {
    pool: Pool,
}

impl PostgresAuthorRepository {
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl Debug for PostgresAuthorRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresAuthorRepository")
            .field("pool", &self.pool.status())
            .finish()
    }
}

/// Builds the point lookup of one author by primary identifier.
pub fn select_statement(id: i64) -> SqlResult<SqlSelectStatement> {
    SqlSelectBuilder::new(TABLE)
        .set_columns(COLUMNS)
        .add_equal("id", id)
        .build()
}

/// Builds the lookup of all authors with any of the given identifiers.
pub fn select_multiple_statement(ids: &[i64]) -> SqlResult<SqlSelectStatement> {
    SqlSelectBuilder::new(TABLE)
        .set_columns(COLUMNS)
        .add_any("id", ids.iter().copied())
        .build()
}

fn map_row(row: &Row) -> AppResult<AuthorRecord> {
    Ok(AuthorRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn select(&self, id: i64) -> AppResult<Option<AuthorRecord>> {
        let statement = select_statement(id)?;
        debug!(sql = %statement.sql, %id, "selecting author");

        let client = self.pool.get().await?;
        let row = client
            .query_opt(statement.sql.as_str(), &statement.get_sql_params())
            .await?;
        row.as_ref().map(map_row).transpose()
    }

    async fn select_multiple(&self, ids: &[i64]) -> AppResult<Vec<AuthorRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let statement = select_multiple_statement(ids)?;
        debug!(sql = %statement.sql, count = ids.len(), "selecting authors");

        let client = self.pool.get().await?;
        let rows = client
            .query(statement.sql.as_str(), &statement.get_sql_params())
            .await?;
        rows.iter().map(map_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use bookshelf_request::value::Value;

    use super::*;

    #[test]
    fn statements() {
        let s = select_statement(7).unwrap();
        assert_eq!(s.sql, r#"SELECT "id", "name" FROM "authors" WHERE "id" = $1"#);
        assert_eq!(s.arguments, vec![Value::Integer(7)]);

        let s = select_multiple_statement(&[3, 1]).unwrap();
        assert_eq!(
            s.sql,
            r#"SELECT "id", "name" FROM "authors" WHERE "id" = ANY($1)"#
        );
        assert_eq!(s.arguments, vec![Value::Repeated(vec![3.into(), 1.into()])]);
    }
}
