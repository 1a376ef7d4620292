//! Route handlers
//!
//! - posts: the posts collection and author-scoped queries
//! - health: liveness check

pub mod health;
pub mod posts;
