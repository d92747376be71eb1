mod sqs_delete_queue;

pub use sqs_delete_queue::{QueueMessage, SqsDeleteQueue};
