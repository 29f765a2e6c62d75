use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::models::{Todo, TodoRequest};
use crate::common::{validation::positive_id, ApiError, ApiResult};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub const TODO_NOT_FOUND: &str = "Todo not found.";

/// Todo routes. Expects an [`AppState`] extension.
pub fn todo_routes() -> Router {
    Router::new()
        .route("/", get(read_all))
        .route("/todo", post(create_todo))
        .route(
            "/todo/:todo_id",
            get(read_todo).put(update_todo).delete(delete_todo),
        )
}

async fn read_all(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(Todo::find_all(&state.db_pool).await?))
}

async fn read_todo(
    Extension(state): Extension<AppState>,
    Path(todo_id): Path<i64>,
) -> ApiResult<Json<Todo>> {
    let todo_id = positive_id("todo_id", todo_id)?;

    Todo::find_by_id(todo_id, &state.db_pool)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(TODO_NOT_FOUND))
}

async fn create_todo(
    Extension(state): Extension<AppState>,
    owner: Option<AuthUser>,
    Json(todo): Json<TodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    todo.validate()?;

    let owner_id = owner.map(|user| user.id);
    let todo = Todo::create(&todo, owner_id, &state.db_pool).await?;
    debug!(todo_id = todo.id, ?owner_id, "Created todo");

    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    Extension(state): Extension<AppState>,
    Path(todo_id): Path<i64>,
    Json(todo): Json<TodoRequest>,
) -> ApiResult<StatusCode> {
    let todo_id = positive_id("todo_id", todo_id)?;
    todo.validate()?;

    match Todo::update(todo_id, &todo, &state.db_pool).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ApiError::not_found(TODO_NOT_FOUND)),
    }
}

async fn delete_todo(
    Extension(state): Extension<AppState>,
    Path(todo_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let todo_id = positive_id("todo_id", todo_id)?;

    if Todo::delete(todo_id, &state.db_pool).await? {
        debug!(todo_id, "Deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(TODO_NOT_FOUND))
    }
}
