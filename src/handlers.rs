// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTTP handlers and router for the users API.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{config::Config, error::Result, schema::AppSchema};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
}

/// GraphQL handler
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground handler
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check handler
async fn health() -> &'static str {
    "OK"
}

/// Build the router with CORS and request tracing
pub fn router(state: AppState, config: &Config) -> Router {
    let origins = config.origins();
    // AllowOrigin::list panics on a wildcard entry
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);

    let graphql = if config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    let mut app = Router::new()
        .route("/graphql", graphql)
        .route("/health", get(health));

    if config.graphiql {
        app = app.route("/graphiql", get(graphiql));
    }

    app.layer(cors).layer(TraceLayer::new_for_http()).with_state(state)
}

/// Bind the configured address and report where we actually ended up.
pub async fn bind(config: &Config) -> Result<(TcpListener, SocketAddr)> {
    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    Ok((listener, local))
}

/// Serve until Ctrl-C
pub async fn serve(state: AppState, config: &Config) -> Result<()> {
    let (listener, addr) = bind(config).await?;
    let app = router(state, config);

    info!(url = %format!("http://{addr}/graphql"), "GraphQL server running");
    if config.graphiql {
        info!("GraphiQL playground: http://{}/graphiql", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
