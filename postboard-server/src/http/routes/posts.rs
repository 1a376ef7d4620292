//! Post routes

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::http::error::ApiResult;
use crate::http::extractors::ValidJson;
use crate::models::{
    CreateAuthorPostRequest, CreatePostRequest, DeleteAck, DeleteAuthorRequest,
    DeletePostRequest, Post, SearchParams, UpdatePostRequest,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts)
                .post(create_post)
                .put(update_post)
                .delete(delete_post),
        )
        // The static segment shadows `/posts/{author}/{title}` for an author
        // literally named "author", so GET is served here too.
        .route(
            "/posts/author/{segment}",
            get(list_literal_author_title_posts).post(create_author_post),
        )
        .route("/posts/{author}", get(list_author_posts))
        .route("/posts/{author}/{title}", get(list_author_title_posts))
        .route("/author", delete(delete_author_posts))
}

/// POST /posts - Create a post
async fn create_post(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreatePostRequest>,
) -> ApiResult<Json<Post>> {
    let input = req.into_input()?;
    let post = state.write().await.create_post(input);
    Ok(Json(post))
}

/// POST /posts/author/{author} - Create a post for the author in the path
async fn create_author_post(
    State(state): State<AppState>,
    Path(author): Path<String>,
    ValidJson(req): ValidJson<CreateAuthorPostRequest>,
) -> ApiResult<Json<Post>> {
    let (author, draft) = req.into_input(author)?;
    let post = state.write().await.create_post_for_author(author, draft);
    Ok(Json(post))
}

/// GET /posts?term= - List all posts or search titles and contents
async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Post>> {
    Json(state.read().await.list_posts(params.term()))
}

/// GET /posts/{author} - Posts by one author
async fn list_author_posts(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = state.read().await.list_posts_by_author(&author)?;
    Ok(Json(posts))
}

/// GET /posts/{author}/{title} - Posts by one author with one title
async fn list_author_title_posts(
    State(state): State<AppState>,
    Path((author, title)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = state
        .read()
        .await
        .list_posts_by_author_and_title(&author, &title)?;
    Ok(Json(posts))
}

/// GET /posts/author/{title} - Posts by the author named "author" with one title
async fn list_literal_author_title_posts(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = state
        .read()
        .await
        .list_posts_by_author_and_title("author", &title)?;
    Ok(Json(posts))
}

/// PUT /posts - Replace title and contents of a post
async fn update_post(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<UpdatePostRequest>,
) -> ApiResult<Json<Post>> {
    let update = req.into_input()?;
    let post = state.write().await.update_post(update)?;
    Ok(Json(post))
}

/// DELETE /posts - Delete one post by id
async fn delete_post(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DeletePostRequest>,
) -> ApiResult<Json<DeleteAck>> {
    let id = req.into_input()?;
    state.write().await.delete_post_by_id(id)?;
    Ok(Json(DeleteAck::ok()))
}

/// DELETE /author - Delete every post by an author
async fn delete_author_posts(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DeleteAuthorRequest>,
) -> ApiResult<Json<Vec<Post>>> {
    let author = req.into_input()?;
    let removed = state.write().await.delete_posts_by_author(&author)?;
    Ok(Json(removed))
}
