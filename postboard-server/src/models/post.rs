//! Post record and the validated inputs that create and mutate it

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A stored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub contents: String,
}

/// Non-empty text field (author, title or contents).
///
/// Whitespace is kept as-is: `" "` is present, `""` is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostText(String);

impl PostText {
    /// Validate an optional body field.
    ///
    /// # Example
    /// ```
    /// use postboard_server::models::PostText;
    ///
    /// assert!(PostText::new("title", Some("Loops".into())).is_ok());
    /// assert!(PostText::new("title", Some(String::new())).is_err());
    /// assert!(PostText::new("title", None).is_err());
    /// ```
    pub fn new(field: &'static str, value: Option<String>) -> Result<Self, ValidationError> {
        match value {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err(ValidationError::Missing { field }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Positive post identifier supplied by a client. Zero counts as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(u64);

impl PostId {
    pub fn new(value: Option<u64>) -> Result<Self, ValidationError> {
        match value {
            Some(id) if id > 0 => Ok(Self(id)),
            _ => Err(ValidationError::Missing { field: "id" }),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Input for creating a post with the author taken from the body
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: PostText,
    pub title: PostText,
    pub contents: PostText,
}

/// Title and contents of a post whose author comes from elsewhere (a path segment)
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: PostText,
    pub contents: PostText,
}

impl PostDraft {
    pub fn with_author(self, author: PostText) -> NewPost {
        NewPost {
            author,
            title: self.title,
            contents: self.contents,
        }
    }
}

/// Replacement title and contents for an existing post
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostText,
    pub contents: PostText,
}

/// Acknowledgment returned by a successful single delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

impl DeleteAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
