// SPDX-License-Identifier: PMPL-1.0-or-later
//! Data models for users

use async_graphql::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID v4)
    pub id: String,
    /// Display name, exactly as supplied at creation
    pub name: String,
}

impl User {
    /// Create a user with a freshly generated identifier
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}

/// Both fields are nullable in the published schema even though the store
/// always fills them in.
#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    /// Display name
    async fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl From<NewUser> for User {
    fn from(input: NewUser) -> Self {
        User::new(input.name)
    }
}
