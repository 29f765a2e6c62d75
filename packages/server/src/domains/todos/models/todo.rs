use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::common::{ValidationErrors, Validator};

/// Todo model - SQL persistence layer
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub complete: bool,
    pub owner_id: Option<i64>,
}

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub complete: bool,
}

impl TodoRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator
            .min_chars("title", &self.title, 3)
            .min_chars("description", &self.description, 3)
            .max_chars("description", &self.description, 100)
            .range("priority", self.priority, 1, 5);
        validator.finish()
    }
}

impl Todo {
    /// All todos, oldest first
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM todos ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Find todo by ID
    pub async fn find_by_id(id: i64, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new todo
    pub async fn create(
        request: &TodoRequest,
        owner_id: Option<i64>,
        pool: &SqlitePool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO todos (title, description, priority, complete, owner_id)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.priority)
        .bind(request.complete)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Replace the editable fields of a todo
    ///
    /// Returns None if no todo has this ID
    pub async fn update(id: i64, request: &TodoRequest, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE todos
             SET title = ?, description = ?, priority = ?, complete = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.priority)
        .bind(request.complete)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a todo
    ///
    /// Returns false if no todo has this ID
    pub async fn delete(id: i64, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TodoRequest {
        TodoRequest {
            title: "Go to the store".to_string(),
            description: "Pick up eggs".to_string(),
            priority: 3,
            complete: false,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_priority_bounds() {
        let mut req = request();
        for priority in [1, 5] {
            req.priority = priority;
            assert!(req.validate().is_ok());
        }
        for priority in [0, 6] {
            req.priority = priority;
            let errors = req.validate().unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["priority"]);
        }
    }

    #[test]
    fn test_text_lengths() {
        let mut req = request();
        req.title = "ab".to_string();
        req.description = "ab".to_string();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title", "description"]);

        req.title = "abc".to_string();
        req.description = "x".repeat(101);
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["description"]);
    }
}
