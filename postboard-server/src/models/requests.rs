//! Request bodies and query parameters as they arrive over HTTP
//!
//! Every field is optional so a partial body still deserializes and the
//! caller gets a validation error naming what is missing.

use serde::Deserialize;

use super::validation::both;
use super::{NewPost, PostDraft, PostId, PostText, PostUpdate, ValidationError};

/// POST /posts body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub contents: Option<String>,
}

impl CreatePostRequest {
    pub fn into_input(self) -> Result<NewPost, ValidationError> {
        let author = PostText::new("author", self.author);
        let title = PostText::new("title", self.title);
        let contents = PostText::new("contents", self.contents);

        let ((author, title), contents) = both(both(author, title), contents)?;
        Ok(NewPost {
            author,
            title,
            contents,
        })
    }
}

/// POST /posts/author/{author} body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAuthorPostRequest {
    pub title: Option<String>,
    pub contents: Option<String>,
}

impl CreateAuthorPostRequest {
    /// Validate the body together with the author taken from the path.
    pub fn into_input(self, author: String) -> Result<(PostText, PostDraft), ValidationError> {
        let author = PostText::new("author", Some(author));
        let title = PostText::new("title", self.title);
        let contents = PostText::new("contents", self.contents);

        let ((author, title), contents) = both(both(author, title), contents)?;
        Ok((author, PostDraft { title, contents }))
    }
}

/// PUT /posts body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub contents: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_input(self) -> Result<PostUpdate, ValidationError> {
        let id = PostId::new(self.id);
        let title = PostText::new("title", self.title);
        let contents = PostText::new("contents", self.contents);

        let ((id, title), contents) = both(both(id, title), contents)?;
        Ok(PostUpdate {
            id,
            title,
            contents,
        })
    }
}

/// DELETE /posts body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeletePostRequest {
    pub id: Option<u64>,
}

impl DeletePostRequest {
    pub fn into_input(self) -> Result<PostId, ValidationError> {
        PostId::new(self.id)
    }
}

/// DELETE /author body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteAuthorRequest {
    pub author: Option<String>,
}

impl DeleteAuthorRequest {
    pub fn into_input(self) -> Result<PostText, ValidationError> {
        PostText::new("author", self.author)
    }
}

/// GET /posts query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
}

impl SearchParams {
    /// The search term, with `?term=` treated as no term at all
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.is_empty())
    }
}
