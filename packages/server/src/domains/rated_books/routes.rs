use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use super::{
    catalog::RatedCatalog,
    models::{RatedBook, RatedBookRequest, EARLIEST_PUBLISH_YEAR},
};
use crate::common::{current_year, validation::positive_id, ApiError, ApiResult, Validator};

pub const BOOK_NOT_FOUND: &str = "Book not found.";

#[derive(Deserialize)]
pub struct RatingQuery {
    rating: i64,
}

#[derive(Deserialize)]
pub struct PublishDateQuery {
    publish_date: i64,
}

/// Rated book catalog routes. Expects a [`RatedCatalog`] extension.
pub fn rated_book_routes() -> Router {
    Router::new()
        .route("/books", get(read_all_books))
        .route("/books/", get(read_books_by_rating))
        .route("/books/publish/", get(read_books_by_publish_date))
        .route("/books/create_book", put(create_book))
        .route("/books/update_book", put(update_book))
        .route("/books/:book_id", get(read_book).delete(delete_book))
}

async fn read_all_books(Extension(catalog): Extension<RatedCatalog>) -> Json<Vec<RatedBook>> {
    Json(catalog.all().await)
}

async fn read_book(
    Extension(catalog): Extension<RatedCatalog>,
    Path(book_id): Path<i64>,
) -> ApiResult<Json<RatedBook>> {
    let book_id = positive_id("book_id", book_id)?;

    catalog
        .find(book_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(BOOK_NOT_FOUND))
}

/// Query ratings are 1..=5; stored ratings may also be 0.
async fn read_books_by_rating(
    Extension(catalog): Extension<RatedCatalog>,
    Query(query): Query<RatingQuery>,
) -> ApiResult<Json<Vec<RatedBook>>> {
    let mut validator = Validator::new();
    validator.range("rating", query.rating, 1, 5);
    validator.finish()?;

    Ok(Json(catalog.filter(|b| b.rating == query.rating).await))
}

async fn read_books_by_publish_date(
    Extension(catalog): Extension<RatedCatalog>,
    Query(query): Query<PublishDateQuery>,
) -> ApiResult<Json<Vec<RatedBook>>> {
    let mut validator = Validator::new();
    validator.range(
        "publish_date",
        query.publish_date,
        EARLIEST_PUBLISH_YEAR,
        current_year(),
    );
    validator.finish()?;

    Ok(Json(
        catalog
            .filter(|b| b.publish_date == query.publish_date)
            .await,
    ))
}

async fn create_book(
    Extension(catalog): Extension<RatedCatalog>,
    Json(book_request): Json<RatedBookRequest>,
) -> ApiResult<(StatusCode, Json<RatedBook>)> {
    book_request.validate()?;

    let book = catalog.insert(book_request).await;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book(
    Extension(catalog): Extension<RatedCatalog>,
    Json(update_book): Json<RatedBookRequest>,
) -> ApiResult<StatusCode> {
    update_book.validate()?;

    if catalog.replace(update_book).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(BOOK_NOT_FOUND))
    }
}

async fn delete_book(
    Extension(catalog): Extension<RatedCatalog>,
    Path(book_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let book_id = positive_id("book_id", book_id)?;

    if catalog.remove(book_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(BOOK_NOT_FOUND))
    }
}
