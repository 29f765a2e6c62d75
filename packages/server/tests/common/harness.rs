//! Test harness for the todo app.
//!
//! Every test gets its own in-memory SQLite database with migrations applied,
//! so tests never observe each other's rows.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_core::common::database::run_migrations;
use catalog_core::domains::auth::JwtService;
use catalog_core::server::build_todo_app;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use test_context::AsyncTestContext;

use super::ApiClient;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.client();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // A single, never-recycled connection: each in-memory connection is
        // its own database.
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        run_migrations(&db_pool).await?;

        let jwt_service = Arc::new(JwtService::new(
            TEST_JWT_SECRET,
            TEST_JWT_ISSUER.to_string(),
            chrono::Duration::minutes(30),
        ));

        Ok(Self {
            db_pool,
            jwt_service,
        })
    }

    /// Client for the todo app backed by this harness's database.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(build_todo_app(
            self.db_pool.clone(),
            self.jwt_service.clone(),
        ))
    }

    /// Client that sends `Authorization: Bearer <token>` on every request.
    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.client().with_token(token)
    }
}
