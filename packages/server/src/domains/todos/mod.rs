//! Todos domain - todo CRUD over the `todos` table
//!
//! Ownership is recorded from the caller's bearer token on create but is not
//! used to filter reads or mutations.

pub mod models;
pub mod routes;

pub use models::{Todo, TodoRequest};
pub use routes::todo_routes;
