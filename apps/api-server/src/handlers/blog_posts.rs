//! Blog post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_core::domain::{BlogPost, TitlePrefix};
use blog_shared::ErrorResponse;
use blog_shared::dto::{BlogPostRequest, BlogPostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub const POST_UPDATED: &str = "Post updated successfully";
pub const POST_DELETED: &str = "Post deleted";

fn to_responses(posts: Vec<BlogPost>) -> Vec<BlogPostResponse> {
    posts.into_iter().map(Into::into).collect()
}

/// POST /blogposts
#[utoipa::path(
    post,
    path = "/blogposts",
    tag = "blogposts",
    request_body = BlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPostResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let post = BlogPost::from(body.into_inner());

    let created = state
        .posts
        .insert(post)
        .await
        .map_err(|e| AppError::store("Failed to create blog post", e))?;

    let location = format!("/blogposts/{}", created.id.as_deref().unwrap_or_default());
    tracing::info!(location = %location, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(BlogPostResponse::from(created)))
}

/// GET /blogposts
#[utoipa::path(
    get,
    path = "/blogposts",
    tag = "blogposts",
    responses(
        (status = 200, description = "All posts", body = [BlogPostResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_all()
        .await
        .map_err(|e| AppError::store("Failed to list blog posts", e))?;

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// GET /blogposts/{title}
#[utoipa::path(
    get,
    path = "/blogposts/{title}",
    tag = "blogposts",
    params(("title" = String, Path, description = "Case-insensitive title prefix")),
    responses(
        (status = 200, description = "Matching posts", body = [BlogPostResponse]),
        (status = 404, description = "No title starts with the prefix", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn find_posts_by_title(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let prefix = TitlePrefix::new(&path.into_inner(), state.raw_title_pattern);

    let posts = state
        .posts
        .find_by_title_prefix(&prefix)
        .await
        .map_err(|e| AppError::store("Failed to search blog posts", e))?;

    if posts.is_empty() {
        return Err(AppError::NotFound(format!(
            "No blog post title starts with '{}'",
            prefix.text()
        )));
    }

    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// PUT /blogposts/{id}
///
/// Replaces the whole document. A replace that leaves the stored content
/// unchanged modifies nothing and answers 404.
#[utoipa::path(
    put,
    path = "/blogposts/{id}",
    tag = "blogposts",
    request_body = BlogPostRequest,
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post replaced", body = String),
        (status = 404, description = "Nothing was modified", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let outcome = state
        .posts
        .replace(&id, BlogPost::from(body.into_inner()))
        .await
        .map_err(|e| AppError::store("Failed to update blog post", e))?;

    if !outcome.is_modified() {
        tracing::debug!(post_id = %id, matched = outcome.matched, "Replace modified nothing");
        return Err(AppError::NotFound(format!("Blog post {} was not modified", id)));
    }

    tracing::info!(post_id = %id, "Blog post updated");
    Ok(HttpResponse::Ok().json(POST_UPDATED))
}

/// DELETE /blogposts/{id}
#[utoipa::path(
    delete,
    path = "/blogposts/{id}",
    tag = "blogposts",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted", body = String),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = state
        .posts
        .delete(&id)
        .await
        .map_err(|e| AppError::store("Failed to delete blog post", e))?;

    if deleted == 0 {
        return Err(AppError::NotFound(format!("Blog post {} not found", id)));
    }

    tracing::info!(post_id = %id, "Blog post deleted");
    Ok(HttpResponse::Ok().json(POST_DELETED))
}
