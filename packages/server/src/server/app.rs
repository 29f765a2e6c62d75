//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::{auth_routes, JwtService};
use crate::domains::books::{book_routes, BookCatalog};
use crate::domains::rated_books::{rated_book_routes, RatedCatalog};
use crate::domains::todos::todo_routes;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::health_handler;

/// Shared state for the todo app
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

/// Build the book catalog router
pub fn build_book_catalog_app(catalog: BookCatalog) -> Router {
    with_common_layers(book_routes().layer(Extension(catalog)))
}

/// Build the rated book catalog router
pub fn build_rated_catalog_app(catalog: RatedCatalog) -> Router {
    with_common_layers(rated_book_routes().layer(Extension(catalog)))
}

/// Build the todo app router (auth + todos + health)
pub fn build_todo_app(pool: SqlitePool, jwt_service: Arc<JwtService>) -> Router {
    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
    };

    let router = Router::new()
        .merge(auth_routes())
        .merge(todo_routes())
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(app_state));

    with_common_layers(router)
}

/// CORS and request tracing, shared by every app
fn with_common_layers(router: Router) -> Router {
    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    router.layer(cors).layer(TraceLayer::new_for_http())
}
