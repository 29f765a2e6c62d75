use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::models::{seed_books, Book};

/// Shared in-memory book list.
///
/// Cloning is cheap; clones share the same underlying list.
#[derive(Clone, Default)]
pub struct BookCatalog {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BookCatalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    pub async fn all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First book whose title matches.
    pub async fn find_by_title(&self, title: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.has_title(title))
            .cloned()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    /// Append a book and return the updated catalog.
    pub async fn add(&self, book: Book) -> Vec<Book> {
        let mut books = self.books.write().await;
        debug!(title = %book.title, "Adding book");
        books.push(book);
        books.clone()
    }

    /// Replace every book whose title matches `book.title`.
    ///
    /// Returns `None` when nothing matched.
    pub async fn replace_by_title(&self, book: Book) -> Option<Vec<Book>> {
        let mut books = self.books.write().await;
        let mut replaced = 0;
        for existing in books.iter_mut().filter(|b| b.has_title(&book.title)) {
            *existing = book.clone();
            replaced += 1;
        }

        if replaced == 0 {
            return None;
        }

        debug!(title = %book.title, replaced, "Replaced books");
        Some(books.clone())
    }

    /// Remove the first book whose title matches.
    ///
    /// Returns `None` when nothing matched.
    pub async fn remove_by_title(&self, title: &str) -> Option<Vec<Book>> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|b| b.has_title(title))?;
        let removed = books.remove(index);
        debug!(title = %removed.title, "Removed book");
        Some(books.clone())
    }
}
