// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL schema type definitions

use async_graphql::{EmptySubscription, Schema};

use crate::{
    resolvers::{MutationRoot, QueryRoot},
    store::UserStore,
};

/// Application GraphQL schema
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the user store attached as resolver data
pub fn build_schema(store: UserStore) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
