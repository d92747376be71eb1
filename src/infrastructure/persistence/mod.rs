mod postgres_post_repository;
mod postgres_user_repository;

pub use postgres_post_repository::PostgresPostRepository;
pub use postgres_user_repository::PostgresUserRepository;
