// SPDX-License-Identifier: PMPL-1.0-or-later
//! Users GraphQL API server
//!
//! Serves `users` and `createUser` over HTTP from an in-memory store.
//! See [`users_graphql_api::config`] for the environment variables it reads.

use tracing::info;

use users_graphql_api::{
    build_schema,
    handlers::{self, AppState},
    telemetry, Config, UserStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    telemetry::init(config.log_json);

    info!(
        bind_addr = %config.bind_addr,
        graphiql = config.graphiql,
        "Starting users GraphQL API"
    );

    let store = UserStore::new();
    let state = AppState {
        schema: build_schema(store),
    };

    handlers::serve(state, &config).await?;

    Ok(())
}
