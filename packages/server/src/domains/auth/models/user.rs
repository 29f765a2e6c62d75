use anyhow::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// User - an account that can log in and own todos
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active: bool,
    pub role: String,
}

/// Fields required to insert a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub hashed_password: String,
    pub role: String,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    /// Find user by username
    pub async fn find_by_username(username: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(id: i64, pool: &SqlitePool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Insert a new, active user
    pub async fn create(new_user: NewUser, pool: &SqlitePool) -> Result<Self> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role)
            VALUES (?, ?, ?, ?, ?, TRUE, ?)
            RETURNING *
            "#,
        )
        .bind(new_user.email)
        .bind(new_user.username)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.hashed_password)
        .bind(new_user.role)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }
}
