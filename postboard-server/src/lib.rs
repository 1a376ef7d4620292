//! postboard-server: in-memory posts store behind an HTTP API
//!
//! The [`PostStore`] owns the post collection; [`AppState`] shares one
//! store between handlers; [`http`] maps the store operations onto axum
//! routes with 422 JSON errors.

pub mod http;
pub mod models;
pub mod state;
pub mod store;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
pub use store::{NotFound, PostStore, StoreError, StoreResult};
