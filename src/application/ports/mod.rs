mod delete_queue;
mod object_store;
mod post_repository;
mod user_repository;

pub use delete_queue::{DeleteQueue, QueueError};
pub use object_store::{ObjectStore, StoreError, StoredObject};
pub use post_repository::{PostRepository, RepositoryError};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use delete_queue::MockDeleteQueue;
#[cfg(test)]
pub use object_store::MockObjectStore;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
