use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::server::app::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    fn status_code(self) -> StatusCode {
        match self {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: HealthStatus,
    database: DatabaseHealth,
    connection_pool: PoolStats,
}

/// Outcome of a `SELECT 1` against the pool.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseHealth {
    Ok,
    Error { error: String },
}

impl DatabaseHealth {
    pub fn is_ok(&self) -> bool {
        matches!(self, DatabaseHealth::Ok)
    }
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

impl PoolStats {
    fn of(pool: &SqlitePool) -> Self {
        Self {
            size: pool.size(),
            idle_connections: pool.num_idle(),
            max_connections: pool.options().get_max_connections(),
        }
    }
}

pub async fn ping_database(pool: &SqlitePool) -> DatabaseHealth {
    match tokio::time::timeout(PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => DatabaseHealth::Ok,
        Ok(Err(e)) => DatabaseHealth::Error {
            error: format!("Query failed: {e}"),
        },
        Err(_) => DatabaseHealth::Error {
            error: format!("Query timed out after {}s", PING_TIMEOUT.as_secs()),
        },
    }
}

/// `GET /health`: 200 when the database answers, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = ping_database(&state.db_pool).await;
    let status = if database.is_ok() {
        HealthStatus::Healthy
    } else {
        tracing::warn!(?database, "Health check failed");
        HealthStatus::Unhealthy
    };

    (
        status.status_code(),
        Json(HealthResponse {
            status,
            database,
            connection_pool: PoolStats::of(&state.db_pool),
        }),
    )
}
