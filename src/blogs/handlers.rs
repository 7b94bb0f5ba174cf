use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    blogs::{
        dto::{BlogResponse, CreateBlogRequest, DeleteBlogResponse, UpdateBlogRequest},
        repo::Blog,
    },
    error::ApiError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blogs/:id", get(get_blog))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs/:id", put(update_blog))
        .route("/blogs/:id", delete(delete_blog))
}

/// Structural id validation, before any store access. A malformed id is a
/// 400, distinct from the 404 of a well-formed id with no record.
pub(crate) fn parse_blog_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformedId)
}

#[instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let blogs = Blog::list_recent(&state.db).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let blog = Blog::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(blog.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required".into()));
    }
    if payload.content.trim().is_empty() {
        return Err(ApiError::Validation("Content is required".into()));
    }

    let blog = Blog::insert(
        &state.db,
        &payload.title,
        &payload.content,
        &payload.tags,
        identity.user_id,
        &identity.name,
    )
    .await?;

    info!(blog_id = %blog.id, author_id = %identity.user_id, "blog created");
    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Check order is fixed: malformed id, then existence, then ownership, then
/// the mutation itself.
#[instrument(skip(state, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;

    let existing = Blog::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    if existing.author_id != identity.user_id {
        return Err(ApiError::Forbidden("update"));
    }

    let updated = Blog::update_fields(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.content.as_deref(),
        payload.tags.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    info!(blog_id = %id, author_id = %identity.user_id, "blog updated");
    Ok(Json(updated.into()))
}

#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteBlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;

    let existing = Blog::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    if existing.author_id != identity.user_id {
        return Err(ApiError::Forbidden("delete"));
    }

    if !Blog::delete(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    info!(blog_id = %id, author_id = %identity.user_id, "blog deleted");
    Ok(Json(DeleteBlogResponse {
        message: "Blog deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_uuid_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_blog_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn malformed_ids_are_rejected_before_lookup() {
        for raw in ["", "abc", "123", "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"] {
            let err = parse_blog_id(raw).unwrap_err();
            assert_eq!(err.kind(), "malformed_id");
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
