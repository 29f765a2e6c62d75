use axum::{
    extract::{Extension, Path, Query},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use super::{catalog::BookCatalog, models::Book};
use crate::common::{ApiError, ApiResult};

pub const BOOK_NOT_FOUND: &str = "Book not found.";

#[derive(Deserialize)]
pub struct CategoryQuery {
    category: String,
}

#[derive(Deserialize)]
pub struct AuthorQuery {
    author: String,
}

/// Book catalog routes. Expects a [`BookCatalog`] extension.
pub fn book_routes() -> Router {
    Router::new()
        .route("/books", get(read_all_books))
        .route("/books/", get(read_books_by_category))
        .route("/books/:book_title", get(read_book))
        .route("/books/:book_title/", get(read_books_by_author_and_category))
        .route("/books/byauthor/", get(read_books_by_author_query))
        .route("/books/byauthor/:author", get(read_books_by_author))
        .route("/books/create_book/", post(create_book))
        .route("/books/update_book/", put(update_book))
        .route("/books/delete_book/:book_title", delete(delete_book))
}

async fn read_all_books(Extension(catalog): Extension<BookCatalog>) -> Json<Vec<Book>> {
    Json(catalog.all().await)
}

async fn read_book(
    Extension(catalog): Extension<BookCatalog>,
    Path(book_title): Path<String>,
) -> ApiResult<Json<Book>> {
    catalog
        .find_by_title(&book_title)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(BOOK_NOT_FOUND))
}

async fn read_books_by_category(
    Extension(catalog): Extension<BookCatalog>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Book>> {
    Json(catalog.filter(|b| b.in_category(&query.category)).await)
}

async fn read_books_by_author(
    Extension(catalog): Extension<BookCatalog>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(catalog.filter(|b| b.has_author(&author)).await)
}

async fn read_books_by_author_query(
    Extension(catalog): Extension<BookCatalog>,
    Query(query): Query<AuthorQuery>,
) -> Json<Vec<Book>> {
    Json(catalog.filter(|b| b.has_author(&query.author)).await)
}

/// `/books/{author}/?category=` - the path segment is the author here.
async fn read_books_by_author_and_category(
    Extension(catalog): Extension<BookCatalog>,
    Path(book_author): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Book>> {
    Json(
        catalog
            .filter(|b| b.has_author(&book_author) && b.in_category(&query.category))
            .await,
    )
}

async fn create_book(
    Extension(catalog): Extension<BookCatalog>,
    Json(new_book): Json<Book>,
) -> Json<Vec<Book>> {
    Json(catalog.add(new_book).await)
}

async fn update_book(
    Extension(catalog): Extension<BookCatalog>,
    Json(update_book): Json<Book>,
) -> ApiResult<Json<Vec<Book>>> {
    catalog
        .replace_by_title(update_book)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(BOOK_NOT_FOUND))
}

async fn delete_book(
    Extension(catalog): Extension<BookCatalog>,
    Path(book_title): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    catalog
        .remove_by_title(&book_title)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(BOOK_NOT_FOUND))
}
