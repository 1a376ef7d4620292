//! Domain models with validation at construction
//!
//! Request bodies arrive loosely typed (every field optional) and are
//! converted into validated inputs before they reach the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod post;
pub mod requests;

pub use validation::ValidationError;
pub use post::{DeleteAck, NewPost, Post, PostDraft, PostId, PostText, PostUpdate};
pub use requests::{
    CreateAuthorPostRequest, CreatePostRequest, DeleteAuthorRequest, DeletePostRequest,
    SearchParams, UpdatePostRequest,
};
