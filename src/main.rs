use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use news_wire::{
    api::{create_router, handlers::StaticPages, router::AppState},
    application::{
        image_lifecycle::ImageLifecycle,
        ports::{DeleteQueue, ObjectStore, PostRepository, UserRepository},
        use_cases::{
            CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, LoginUserUseCase,
            RegisterUserUseCase, UpdatePostUseCase,
        },
    },
    infrastructure::{
        persistence::{PostgresPostRepository, PostgresUserRepository},
        queue::SqsDeleteQueue,
        storage::S3ObjectStore,
    },
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting news-wire service");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize database connection pool
    info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;

    // Run database migrations
    info!("Running database migrations");
    sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run migrations: {}", e);
        e
    })?;

    // Initialize infrastructure layer
    let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let image_store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
        &shared,
        &config,
        config.storage_bucket.clone(),
    ));
    let page_store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
        &shared,
        &config,
        config.static_pages_bucket.clone(),
    ));
    let delete_queue: Arc<dyn DeleteQueue> = Arc::new(SqsDeleteQueue::new(&shared, &config));

    info!("Infrastructure layer initialized");

    // Initialize application layer
    let images = Arc::new(ImageLifecycle::new(
        Arc::clone(&image_store),
        Arc::clone(&delete_queue),
    ));

    let register_use_case = Arc::new(RegisterUserUseCase::new(Arc::clone(&user_repo)));
    let login_use_case = Arc::new(LoginUserUseCase::new(Arc::clone(&user_repo)));
    let create_post_use_case = Arc::new(CreatePostUseCase::new(
        Arc::clone(&post_repo),
        Arc::clone(&images),
    ));
    let update_post_use_case = Arc::new(UpdatePostUseCase::new(
        Arc::clone(&post_repo),
        Arc::clone(&images),
    ));
    let delete_post_use_case = Arc::new(DeletePostUseCase::new(
        Arc::clone(&post_repo),
        Arc::clone(&images),
    ));
    let list_posts_use_case = Arc::new(ListPostsUseCase::new(Arc::clone(&post_repo)));

    let static_pages = Arc::new(StaticPages {
        enabled: config.static_pages_enabled,
        templates_dir: config.templates_dir.clone(),
        store: page_store,
    });

    info!("Application layer initialized");

    // Create app state
    let listen_addr = config.listen_addr.clone();
    let state = AppState {
        pool: Arc::new(pool),
        config: Arc::new(config),
        register_use_case,
        login_use_case,
        create_post_use_case,
        update_post_use_case,
        delete_post_use_case,
        list_posts_use_case,
        static_pages,
    };

    // Create router
    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
