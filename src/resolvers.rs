// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL resolvers for user queries and mutations

use async_graphql::{Context, Object, Result};
use tracing::info;

use crate::{
    models::{NewUser, User},
    store::UserStore,
};

/// GraphQL Query root
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List all users in creation order
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let store = ctx.data::<UserStore>()?;
        let users = store.list().await;
        Ok(Some(users.into_iter().map(Some).collect()))
    }
}

/// GraphQL Mutation root
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new user with a generated id
    async fn create_user(&self, ctx: &Context<'_>, name: String) -> Result<Option<User>> {
        let store = ctx.data::<UserStore>()?;
        let user = store.create(NewUser { name }).await;
        info!(id = %user.id, "Created user");
        Ok(Some(user))
    }
}
