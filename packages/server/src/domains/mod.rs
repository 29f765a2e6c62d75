// Business domains
pub mod auth;
pub mod books;
pub mod rated_books;
pub mod todos;
