use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::CurrentUser;
use crate::application::dto::PostDto;
use crate::application::image_lifecycle::ImageUpload;
use crate::application::use_cases::{
    CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::domain::value_objects::PostId;

/// Fields accepted by the create/edit multipart forms
struct PostForm {
    title: String,
    content: String,
    image: Option<ImageUpload>,
}

async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, ApiError> {
    let mut title = None;
    let mut content = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| {
                    ApiError::bad_request(format!("Invalid title field: {}", e))
                })?);
            }
            Some("content") => {
                content = Some(field.text().await.map_err(|e| {
                    ApiError::bad_request(format!("Invalid content field: {}", e))
                })?);
            }
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Invalid image field: {}", e))
                })?;

                // Browsers submit an empty file part when nothing was chosen
                if !filename.is_empty() && !bytes.is_empty() {
                    image = Some(ImageUpload {
                        filename,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| ApiError::bad_request("Title is required"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("Content is required"))?;

    Ok(PostForm {
        title,
        content,
        image,
    })
}

fn require_user(user: Option<CurrentUser>) -> Result<CurrentUser, ApiError> {
    user.ok_or_else(|| ApiError::unauthorized("Sign in required"))
}

fn parse_post_id(id: &str) -> Result<PostId, ApiError> {
    id.parse::<PostId>()
        .map_err(|e| ApiError::bad_request(format!("Invalid post ID: {}", e)))
}

/// POST /posts
pub async fn create_post_handler(
    State(use_case): State<Arc<CreatePostUseCase>>,
    Extension(user): Extension<Option<CurrentUser>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<PostDto>), ApiError> {
    let user = require_user(user)?;
    let form = read_post_form(multipart).await?;

    let post = use_case
        .execute(user.id, form.title, form.content, form.image)
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
pub async fn list_posts_handler(
    State(use_case): State<Arc<ListPostsUseCase>>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    Ok(Json(use_case.all().await?))
}

/// GET /posts/{id}
pub async fn get_post_handler(
    State(use_case): State<Arc<ListPostsUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<PostDto>, ApiError> {
    let post_id = parse_post_id(&id)?;
    Ok(Json(use_case.get(&post_id).await?))
}

/// PUT /posts/{id}
pub async fn update_post_handler(
    State(use_case): State<Arc<UpdatePostUseCase>>,
    Extension(user): Extension<Option<CurrentUser>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<PostDto>, ApiError> {
    let user = require_user(user)?;
    let post_id = parse_post_id(&id)?;
    let form = read_post_form(multipart).await?;

    let post = use_case
        .execute(user.id, &post_id, form.title, form.content, form.image)
        .await?;

    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post_handler(
    State(use_case): State<Arc<DeletePostUseCase>>,
    Extension(user): Extension<Option<CurrentUser>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(user)?;
    let post_id = parse_post_id(&id)?;

    use_case.execute(user.id, &post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /my/posts
pub async fn my_posts_handler(
    State(use_case): State<Arc<ListPostsUseCase>>,
    Extension(user): Extension<Option<CurrentUser>>,
) -> Result<Json<Vec<PostDto>>, ApiError> {
    let user = require_user(user)?;
    Ok(Json(use_case.by_author(&user.id).await?))
}
