// SPDX-License-Identifier: PMPL-1.0-or-later
//! Users GraphQL API
//!
//! A small GraphQL endpoint showing how clients pick exactly the fields they
//! need instead of over- or under-fetching from fixed REST routes.
//!
//! Schema:
//!
//! ```graphql
//! type User { id: String, name: String }
//! type Query { users: [User] }
//! type Mutation { createUser(name: String!): User }
//! ```
//!
//! Users live in an in-memory [`UserStore`] for the lifetime of the process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod resolvers;
pub mod schema;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{NewUser, User};
pub use schema::{build_schema, AppSchema};
pub use store::UserStore;
