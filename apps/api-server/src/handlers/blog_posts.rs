//! Blog post collection handlers, mounted under `/blogPostsRouter`.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use blog_core::domain::{BlogPostUpdate, NewBlogPost};
use blog_shared::dto::{CreateBlogPostRequest, PublishDate, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /blogPostsRouter
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.list().await)
}

/// GET /blogPostsRouter/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /blogPostsRouter
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = NewBlogPost {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        author: req.author.unwrap_or_default(),
        publish_date: parse_publish_date(req.publish_date)?,
    };

    let post = state.posts.create(input).await?;
    tracing::info!(post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /blogPostsRouter/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let update = BlogPostUpdate {
        id: req.id,
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        author: req.author.unwrap_or_default(),
        publish_date: parse_publish_date(req.publish_date)?,
    };

    state.posts.update(id, update).await?;
    tracing::info!(post_id = %id, "Updated blog post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogPostsRouter/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.remove(id).await?;
    tracing::info!(post_id = %id, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}

fn parse_publish_date(value: Option<PublishDate>) -> AppResult<Option<DateTime<Utc>>> {
    value
        .map(|date| {
            date.to_datetime()
                .ok_or_else(|| AppError::BadRequest("`publishDate` is out of range".to_string()))
        })
        .transpose()
}
