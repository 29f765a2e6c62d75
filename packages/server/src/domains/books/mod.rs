//! Book catalog - in-memory books looked up by title, author and category
//!
//! All comparisons are case-insensitive. Mutating endpoints answer with the
//! whole catalog so clients can re-render without a second request.

pub mod catalog;
pub mod models;
pub mod routes;

pub use catalog::BookCatalog;
pub use models::Book;
pub use routes::book_routes;
