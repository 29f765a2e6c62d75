//! Auth domain - user accounts and bearer tokens for the todo app
//!
//! Responsibilities:
//! - User creation with Argon2id password hashes
//! - OAuth2 password-grant token issuance (HS256 JWT)
//! - Token verification (see `server::middleware::jwt_auth`)

pub mod jwt;
pub mod models;
pub mod password;
pub mod routes;

pub use jwt::{Claims, JwtService};
pub use models::User;
pub use routes::{auth_routes, authenticate_user, Token, COULD_NOT_VALIDATE};
