mod create_post;
mod delete_post;
mod list_posts;
mod login_user;
mod register_user;
mod update_post;

pub use create_post::{CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use list_posts::{ListError, ListPostsUseCase};
pub use login_user::{LoginError, LoginUserUseCase};
pub use register_user::{RegisterError, RegisterUserUseCase};
pub use update_post::{UpdatePostError, UpdatePostUseCase};
