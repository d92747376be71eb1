use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStore, StoreError};

/// Static-page origin: pre-rendered bodies in a bucket, local templates as
/// fallback. Purely presentational.
pub struct StaticPages {
    pub enabled: bool,
    pub templates_dir: PathBuf,
    pub store: Arc<dyn ObjectStore>,
}

/// GET /  (the home page is the "index" static page)
pub async fn index_handler(State(pages): State<Arc<StaticPages>>) -> Response {
    serve_page(&pages, "index").await
}

/// GET /pages/{name}
pub async fn page_handler(
    State(pages): State<Arc<StaticPages>>,
    Path(name): Path<String>,
) -> Response {
    serve_page(&pages, &name).await
}

async fn serve_page(pages: &StaticPages, name: &str) -> Response {
    // Logical names only: no separators, no traversal
    if name.is_empty() || name.contains('/') || name.contains("..") {
        return not_found(pages).await;
    }

    let file = if name.ends_with(".html") {
        name.to_string()
    } else {
        format!("{}.html", name)
    };

    if pages.enabled {
        match pages.store.get(&file).await {
            Ok(object) => {
                let content_type = object
                    .content_type
                    .unwrap_or_else(|| "text/html; charset=utf-8".to_string());
                return ([(header::CONTENT_TYPE, content_type)], object.bytes).into_response();
            }
            Err(StoreError::NotFound(_)) => {}
            Err(e) => {
                tracing::warn!(page = %file, error = %e, "static page fetch failed, using local template");
            }
        }
    }

    match local_template(pages, &file).await {
        Some(body) => Html(body).into_response(),
        None => not_found(pages).await,
    }
}

async fn local_template(pages: &StaticPages, file: &str) -> Option<String> {
    tokio::fs::read_to_string(pages.templates_dir.join(file))
        .await
        .ok()
}

async fn not_found(pages: &StaticPages) -> Response {
    match local_template(pages, "404.html").await {
        Some(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        None => (StatusCode::NOT_FOUND, "Page not found").into_response(),
    }
}
