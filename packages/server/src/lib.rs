// Catalog Server - Core
//
// Three small CRUD services sharing one HTTP stack: an in-memory book
// catalog, a validated rated-book catalog, and a todo app with user
// accounts and bearer tokens backed by SQLite.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
