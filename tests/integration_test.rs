// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for the users store and GraphQL schema

use async_graphql::{Request, Variables};
use serde_json::json;
use users_graphql_api::{build_schema, NewUser, UserStore};

fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_store_preserves_creation_order() {
    let store = UserStore::new();

    let names = ["Carol", "Alice", "Bob", "Alice"];
    for name in names {
        store.create(new_user(name)).await;
    }

    let listed: Vec<String> = store.list().await.into_iter().map(|u| u.name).collect();
    assert_eq!(listed, names);
}

#[tokio::test]
async fn test_store_ids_are_distinct() {
    let store = UserStore::new();

    let a = store.create(new_user("Alice")).await;
    let b = store.create(new_user("Alice")).await;

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_store_keeps_name_exactly() {
    let store = UserStore::new();

    for name in ["  padded  ", "", "Zoë ✓", "MiXeD"] {
        let user = store.create(new_user(name)).await;
        assert_eq!(user.name, name);
    }
}

#[tokio::test]
async fn test_query_empty_store_returns_empty_list() {
    let schema = build_schema(UserStore::new());

    let response = schema.execute("{ users { id name } }").await;
    assert!(response.errors.is_empty());

    let data = response.data.into_json().unwrap();
    assert_eq!(data, json!({ "users": [] }));
}

#[tokio::test]
async fn test_create_then_list_scenario() {
    let store = UserStore::new();
    let schema = build_schema(store.clone());

    let alice = schema
        .execute(r#"mutation { createUser(name: "Alice") { id name } }"#)
        .await;
    assert!(alice.errors.is_empty());
    let alice = alice.data.into_json().unwrap();

    let bob = schema
        .execute(r#"mutation { createUser(name: "Bob") { id name } }"#)
        .await;
    assert!(bob.errors.is_empty());
    let bob = bob.data.into_json().unwrap();

    let alice_id = alice["createUser"]["id"].as_str().unwrap().to_string();
    let bob_id = bob["createUser"]["id"].as_str().unwrap().to_string();
    assert_eq!(alice["createUser"]["name"], "Alice");
    assert_eq!(bob["createUser"]["name"], "Bob");
    assert_ne!(alice_id, bob_id);

    let listed = schema.execute("{ users { id name } }").await;
    assert!(listed.errors.is_empty());
    assert_eq!(
        listed.data.into_json().unwrap(),
        json!({
            "users": [
                { "id": alice_id, "name": "Alice" },
                { "id": bob_id, "name": "Bob" },
            ]
        })
    );
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_client_selects_only_requested_fields() {
    let schema = build_schema(UserStore::new());

    schema
        .execute(r#"mutation { createUser(name: "Alice") { id } }"#)
        .await;

    let response = schema.execute("{ users { name } }").await;
    let data = response.data.into_json().unwrap();
    assert_eq!(data, json!({ "users": [{ "name": "Alice" }] }));
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let store = UserStore::new();
    let schema = build_schema(store.clone());

    let response = schema.execute("mutation { createUser { id name } }").await;

    assert!(!response.errors.is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_null_name_variable_is_rejected() {
    let store = UserStore::new();
    let schema = build_schema(store.clone());

    let request = Request::new("mutation ($name: String) { createUser(name: $name) { id } }")
        .variables(Variables::from_json(json!({ "name": null })));
    let response = schema.execute(request).await;

    assert!(!response.errors.is_empty());
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn test_create_with_name_variable() {
    let store = UserStore::new();
    let schema = build_schema(store.clone());

    let request = Request::new("mutation ($name: String!) { createUser(name: $name) { name } }")
        .variables(Variables::from_json(json!({ "name": "Dana" })));
    let response = schema.execute(request).await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "createUser": { "name": "Dana" } })
    );
    assert_eq!(store.list().await[0].name, "Dana");
}

#[test]
fn test_sdl_matches_wire_contract() {
    let sdl = build_schema(UserStore::new()).sdl();

    assert!(sdl.contains("type User {"));
    assert!(sdl.contains("type Query {"));
    assert!(sdl.contains("type Mutation {"));
    assert!(sdl.contains("id: String\n"));
    assert!(sdl.contains("name: String\n"));
    assert!(sdl.contains("users: [User]\n"));
    assert!(sdl.contains("createUser(name: String!): User\n"));
    assert!(!sdl.contains("id: String!"));
}
