//! Bookshelf GraphQL Service
//!
//! A read-only GraphQL API over a catalog of books and authors.
//!
//! ## Features
//!
//! - `books` query with author, title search and limit filters
//! - `PostgreSQL` and in-memory storage
//! - Sequential or batched author resolution
//! - Structured logging and tracing

use std::sync::Arc;

use tracing::info;

use bookshelf_service::{
    author::{
        query_manager::AuthorQueryManager,
        repository::{AuthorRepositoryArc, postgres::PostgresAuthorRepository},
    },
    book::{
        query_manager::BookQueryManager,
        repository::{BookRepositoryArc, postgres::PostgresBookRepository},
    },
    catalog,
    config::{AppConfig, DatabaseConfig},
    database::create_pool,
    error::AppResult,
    graphql::{build_schema, server::serve},
    telemetry::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::load()?;

    Tracer::install(&config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or_default(),
    );

    start(&config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    match &config.database {
        DatabaseConfig::Memory => {
            info!("Serving the sample catalog from memory");
            let author_repository: AuthorRepositoryArc = Arc::new(catalog::author_repository());
            let book_repository: BookRepositoryArc = Arc::new(catalog::book_repository());
            run(config, author_repository, book_repository).await
        }
        DatabaseConfig::Postgres(postgres_config) => {
            let pool = create_pool(postgres_config)?;
            let author_repository: AuthorRepositoryArc =
                Arc::new(PostgresAuthorRepository::new(pool.clone()));
            let book_repository: BookRepositoryArc =
                Arc::new(PostgresBookRepository::new(pool.clone()));

            let result = run(config, author_repository, book_repository).await;
            pool.close();
            info!("PostgreSQL pool closed");
            result
        }
    }
}

async fn run(
    config: &AppConfig,
    author_repository: AuthorRepositoryArc,
    book_repository: BookRepositoryArc,
) -> AppResult<()> {
    let author_query_manager = AuthorQueryManager::new(author_repository);
    let book_query_manager = BookQueryManager::new(
        book_repository,
        author_query_manager,
        config.resolver.author_loading,
    );

    serve(config.server.http_address, build_schema(book_query_manager)).await
}
