//! Rated book catalog - in-memory books with numeric ids, ratings and
//! publish years. Requests are validated before they touch the catalog.

pub mod catalog;
pub mod models;
pub mod routes;

pub use catalog::RatedCatalog;
pub use models::{RatedBook, RatedBookRequest};
pub use routes::rated_book_routes;
