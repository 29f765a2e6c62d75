//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use catalog_core::domains::auth::models::{NewUser, User};
use catalog_core::domains::auth::password::hash_password;
use catalog_core::domains::todos::{Todo, TodoRequest};
use serde_json::{json, Value};
use sqlx::SqlitePool;

pub const TEST_PASSWORD: &str = "test1234";

/// Create an active test user whose password is [`TEST_PASSWORD`]
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Result<User> {
    User::create(
        NewUser {
            email: format!("{username}@example.com"),
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            hashed_password: hash_password(TEST_PASSWORD)?,
            role: "user".to_string(),
        },
        pool,
    )
    .await
}

/// Create a test todo with no owner
pub async fn create_test_todo(pool: &SqlitePool, title: &str) -> Result<Todo> {
    Todo::create(
        &TodoRequest {
            title: title.to_string(),
            description: "Test description".to_string(),
            priority: 3,
            complete: false,
        },
        None,
        pool,
    )
    .await
}

/// JSON body for `POST /auth/`
pub fn create_user_body(username: &str, password: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "first_name": "Eric",
        "last_name": "Roby",
        "password": password,
        "role": "admin",
    })
}

/// JSON body for `POST /todo` and `PUT /todo/{id}`
pub fn todo_body(title: &str, description: &str, priority: i64, complete: bool) -> Value {
    json!({
        "title": title,
        "description": description,
        "priority": priority,
        "complete": complete,
    })
}
