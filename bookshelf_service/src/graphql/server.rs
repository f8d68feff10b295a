use std::net::SocketAddr;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::{error::AppResult, graphql::BookshelfSchema};

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}

/// Builds the HTTP router serving the schema.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphql_playground).post(graphql_handler),
        )
        .layer(Extension(schema))
}

/// Serves the schema until a shutdown signal is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn serve(address: SocketAddr, schema: BookshelfSchema) -> AppResult<()> {
    let listener = TcpListener::bind(address).await?;
    info!("GraphQL server started at http://{}{}", address, GRAPHQL_PATH);

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
    }
}
