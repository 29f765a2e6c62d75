use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::models::{seed_books, RatedBook, RatedBookRequest};

#[derive(Clone, Default)]
pub struct RatedCatalog {
    books: Arc<RwLock<Vec<RatedBook>>>,
}

impl RatedCatalog {
    pub fn new(books: Vec<RatedBook>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    pub async fn all(&self) -> Vec<RatedBook> {
        self.books.read().await.clone()
    }

    pub async fn find(&self, id: i64) -> Option<RatedBook> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<RatedBook>
    where
        F: Fn(&RatedBook) -> bool,
    {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    /// Store a new book under the next id: 1 for an empty catalog,
    /// otherwise the last book's id + 1.
    pub async fn insert(&self, request: RatedBookRequest) -> RatedBook {
        let mut books = self.books.write().await;
        let id = books.last().map_or(1, |last| last.id + 1);
        let book = request.into_book(id);
        debug!(id, title = %book.title, "Adding rated book");
        books.push(book.clone());
        book
    }

    /// Replace the book whose id matches `request.id`.
    ///
    /// Returns `false` when no such book exists or the request has no id.
    pub async fn replace(&self, request: RatedBookRequest) -> bool {
        let Some(id) = request.id else {
            return false;
        };

        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(existing) => {
                *existing = request.into_book(id);
                debug!(id, "Replaced rated book");
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: i64) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.id == id) {
            Some(index) => {
                books.remove(index);
                debug!(id, "Removed rated book");
                true
            }
            None => false,
        }
    }
}
