pub mod auth;
pub mod debug;
pub mod health;
pub mod pages;
pub mod posts;

pub use auth::{login_handler, register_handler};
pub use debug::debug_config_handler;
pub use health::{health_handler, readiness_handler};
pub use pages::{index_handler, page_handler, StaticPages};
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    my_posts_handler, update_post_handler,
};
