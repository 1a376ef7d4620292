//! In-memory post store
//!
//! Owns the ordered collection of posts and the id counter. Ids are
//! handed out monotonically and never reused, even after deletes.
//! Listing order is insertion order; updates mutate in place.

use thiserror::Error;

use crate::models::{NewPost, Post, PostDraft, PostId, PostText, PostUpdate, ValidationError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Which lookup came back empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("no post with id {0}")]
    Id(u64),

    #[error("no post for given author '{0}'")]
    Author(String),

    #[error("no post for given author+title '{author}'/'{title}'")]
    AuthorTitle { author: String, title: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

/// The authoritative post collection
#[derive(Debug)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Append a post under the next id and return it.
    pub fn create_post(&mut self, input: NewPost) -> Post {
        let post = Post {
            id: self.next_id,
            author: input.author.into_string(),
            title: input.title.into_string(),
            contents: input.contents.into_string(),
        };
        self.next_id += 1;
        self.posts.push(post.clone());

        tracing::info!(id = post.id, author = %post.author, "post created");
        post
    }

    /// Same as [`create_post`](Self::create_post) with the author supplied
    /// separately from title and contents.
    pub fn create_post_for_author(
        &mut self,
        author: PostText,
        draft: PostDraft,
    ) -> Post {
        self.create_post(draft.with_author(author))
    }

    /// All posts, or those whose title or contents contain `term`.
    ///
    /// Matching is plain case-sensitive substring containment. An empty
    /// result is not an error.
    pub fn list_posts(&self, term: Option<&str>) -> Vec<Post> {
        let posts: Vec<Post> = match term {
            Some(term) => self
                .posts
                .iter()
                .filter(|p| p.title.contains(term) || p.contents.contains(term))
                .cloned()
                .collect(),
            None => self.posts.clone(),
        };

        tracing::debug!(term = ?term, matched = posts.len(), "listed posts");
        posts
    }

    /// Posts written by exactly `author`; an author with no posts is an error.
    pub fn list_posts_by_author(&self, author: &str) -> StoreResult<Vec<Post>> {
        let posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.author == author)
            .cloned()
            .collect();

        if posts.is_empty() {
            return Err(StoreError::NotFound(NotFound::Author(author.to_owned())));
        }
        Ok(posts)
    }

    pub fn list_posts_by_author_and_title(
        &self,
        author: &str,
        title: &str,
    ) -> StoreResult<Vec<Post>> {
        let posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.author == author && p.title == title)
            .cloned()
            .collect();

        if posts.is_empty() {
            return Err(StoreError::NotFound(NotFound::AuthorTitle {
                author: author.to_owned(),
                title: title.to_owned(),
            }));
        }
        Ok(posts)
    }

    /// Replace title and contents of an existing post. Id and author never change.
    pub fn update_post(&mut self, update: PostUpdate) -> StoreResult<Post> {
        let id = update.id.get();
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(NotFound::Id(id)))?;

        post.title = update.title.into_string();
        post.contents = update.contents.into_string();

        tracing::info!(id, author = %post.author, "post updated");
        Ok(post.clone())
    }

    pub fn delete_post_by_id(&mut self, id: PostId) -> StoreResult<()> {
        let id = id.get();
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(NotFound::Id(id)))?;

        let removed = self.posts.remove(index);
        tracing::info!(id, author = %removed.author, "post deleted");
        Ok(())
    }

    /// Remove every post by `author` and return them in their former order.
    pub fn delete_posts_by_author(&mut self, author: &PostText) -> StoreResult<Vec<Post>> {
        let author = author.as_str();
        let (removed, kept): (Vec<Post>, Vec<Post>) = std::mem::take(&mut self.posts)
            .into_iter()
            .partition(|p| p.author == author);
        self.posts = kept;

        if removed.is_empty() {
            return Err(StoreError::NotFound(NotFound::Author(author.to_owned())));
        }

        tracing::info!(author, removed = removed.len(), "author posts deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> PostText {
        PostText::new("field", Some(s.to_owned())).unwrap()
    }

    fn new_post(author: &str, title: &str, contents: &str) -> NewPost {
        NewPost {
            author: text(author),
            title: text(title),
            contents: text(contents),
        }
    }

    fn update(id: u64, title: &str, contents: &str) -> PostUpdate {
        PostUpdate {
            id: PostId::new(Some(id)).unwrap(),
            title: text(title),
            contents: text(contents),
        }
    }

    fn seeded() -> PostStore {
        let mut store = PostStore::new();
        store.create_post(new_post("Ada", "Loops", "for and while"));
        store.create_post(new_post("Grace", "Compilers", "a loop in COBOL"));
        store.create_post(new_post("Ada", "Engines", "analytical"));
        store
    }

    #[test]
    fn ids_increase_and_are_never_reused() {
        let mut store = PostStore::new();
        let a = store.create_post(new_post("Ada", "A", "a"));
        let b = store.create_post(new_post("Ada", "B", "b"));
        assert_eq!((a.id, b.id), (1, 2));

        store.delete_post_by_id(PostId::new(Some(2)).unwrap()).unwrap();
        let c = store.create_post(new_post("Ada", "C", "c"));
        assert_eq!(c.id, 3);
    }

    #[test]
    fn create_for_author_uses_supplied_author() {
        let mut store = PostStore::new();
        let draft = PostDraft {
            title: text("Loops"),
            contents: text("for"),
        };
        let post = store.create_post_for_author(text("Ada"), draft);
        assert_eq!(post.author, "Ada");
        assert_eq!(post.id, 1);
    }

    #[test]
    fn list_keeps_insertion_order_after_mutations() {
        let mut store = seeded();
        store.update_post(update(1, "Loops2", "changed")).unwrap();
        store.delete_post_by_id(PostId::new(Some(2)).unwrap()).unwrap();

        let ids: Vec<u64> = store.list_posts(None).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_matches_title_or_contents() {
        let store = seeded();

        let ids: Vec<u64> = store.list_posts(Some("Loop")).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        let ids: Vec<u64> = store.list_posts(Some("loop")).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);

        assert!(store.list_posts(Some("nothing here")).is_empty());
    }

    #[test]
    fn by_author_returns_all_or_not_found() {
        let store = seeded();
        assert_eq!(store.list_posts_by_author("Ada").unwrap().len(), 2);
        assert_eq!(
            store.list_posts_by_author("Linus").unwrap_err(),
            StoreError::NotFound(NotFound::Author("Linus".into()))
        );
    }

    #[test]
    fn by_author_and_title_is_exact() {
        let store = seeded();
        let posts = store.list_posts_by_author_and_title("Ada", "Loops").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);

        assert!(matches!(
            store.list_posts_by_author_and_title("Ada", "Loop"),
            Err(StoreError::NotFound(NotFound::AuthorTitle { .. }))
        ));
    }

    #[test]
    fn update_changes_only_title_and_contents() {
        let mut store = seeded();
        let post = store.update_post(update(3, "Mills", "difference")).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.author, "Ada");
        assert_eq!(post.title, "Mills");
        assert_eq!(post.contents, "difference");
        assert_eq!(store.list_posts(None)[2], post);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = seeded();
        assert_eq!(
            store.update_post(update(42, "x", "y")).unwrap_err(),
            StoreError::NotFound(NotFound::Id(42))
        );
    }

    #[test]
    fn delete_by_id_twice_fails_second_time() {
        let mut store = seeded();
        let id = PostId::new(Some(1)).unwrap();
        store.delete_post_by_id(id).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.delete_post_by_id(id).unwrap_err(),
            StoreError::NotFound(NotFound::Id(1))
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_by_author_removes_all_and_only_theirs() {
        let mut store = seeded();
        let removed = store.delete_posts_by_author(&text("Ada")).unwrap();
        assert_eq!(removed.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(store.len(), 1);
        assert!(store.list_posts_by_author("Ada").is_err());
        assert!(store.list_posts_by_author("Grace").is_ok());
    }

    #[test]
    fn delete_unknown_author_keeps_store() {
        let mut store = seeded();
        assert!(store.delete_posts_by_author(&text("Linus")).is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn not_found_messages() {
        assert_eq!(NotFound::Id(3).to_string(), "no post with id 3");
        assert_eq!(
            NotFound::Author("Ada".into()).to_string(),
            "no post for given author 'Ada'"
        );
        let err: StoreError = NotFound::AuthorTitle {
            author: "Ada".into(),
            title: "Loops".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "no post for given author+title 'Ada'/'Loops'"
        );
    }
}
