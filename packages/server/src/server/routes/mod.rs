// HTTP routes shared across apps
pub mod health;

pub use health::*;
