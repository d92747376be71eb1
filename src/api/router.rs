use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_post_handler, debug_config_handler, delete_post_handler, get_post_handler,
    health_handler, index_handler, list_posts_handler, login_handler, my_posts_handler,
    page_handler, readiness_handler, register_handler, update_post_handler, StaticPages,
};
use crate::api::middleware::auth;
use crate::application::use_cases::{
    CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, LoginUserUseCase, RegisterUserUseCase,
    UpdatePostUseCase,
};
use crate::config::Config;

/// Uploads beyond this are rejected before reaching any handler
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub config: Arc<Config>,
    pub register_use_case: Arc<RegisterUserUseCase>,
    pub login_use_case: Arc<LoginUserUseCase>,
    pub create_post_use_case: Arc<CreatePostUseCase>,
    pub update_post_use_case: Arc<UpdatePostUseCase>,
    pub delete_post_use_case: Arc<DeletePostUseCase>,
    pub list_posts_use_case: Arc<ListPostsUseCase>,
    pub static_pages: Arc<StaticPages>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let list_state = Arc::clone(&state.list_posts_use_case);
    let pages_state = Arc::clone(&state.static_pages);

    Router::new()
        // Health and debug (no auth required)
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        .route(
            "/debug/config",
            get(debug_config_handler).with_state(Arc::clone(&state.config)),
        )
        // Auth
        .route(
            "/auth/register",
            post(register_handler).with_state(state.register_use_case),
        )
        .route(
            "/auth/login",
            post(login_handler).with_state(state.login_use_case),
        )
        // Posts
        .route(
            "/posts",
            get(list_posts_handler).with_state(Arc::clone(&list_state)),
        )
        .route(
            "/posts",
            post(create_post_handler).with_state(state.create_post_use_case),
        )
        .route(
            "/posts/{id}",
            get(get_post_handler).with_state(Arc::clone(&list_state)),
        )
        .route(
            "/posts/{id}",
            put(update_post_handler).with_state(state.update_post_use_case),
        )
        .route(
            "/posts/{id}",
            delete(delete_post_handler).with_state(state.delete_post_use_case),
        )
        .route("/my/posts", get(my_posts_handler).with_state(list_state))
        // Static pages
        .route("/", get(index_handler).with_state(Arc::clone(&pages_state)))
        .route("/pages/{name}", get(page_handler).with_state(pages_state))
        // Middleware layers
        .layer(axum_middleware::from_fn(auth::auth_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
}
