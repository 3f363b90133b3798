//! HTTP request handlers for API endpoints.

pub mod health;
pub mod search;

pub use health::{health_handler, root_handler};
pub use search::search_handler;
