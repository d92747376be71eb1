use async_trait::async_trait;
use aws_sdk_sqs::config::{Credentials, Region};

use crate::application::ports::{DeleteQueue, QueueError};
use crate::config::Config;

/// A message pulled off the delete queue
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub body: String,
    pub receipt_handle: String,
}

/// Delete queue adapter for SQS-compatible endpoints.
///
/// The server side only enqueues; the receive/ack half is used by the
/// `delete-worker` binary.
pub struct SqsDeleteQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsDeleteQueue {
    pub fn new(shared: &aws_config::SdkConfig, config: &Config) -> Self {
        let mut builder = aws_sdk_sqs::config::Builder::from(shared)
            .region(Region::new(config.storage_region.clone()))
            .endpoint_url(&config.queue_endpoint);

        if !config.storage_access_key_id.is_empty() {
            builder = builder.credentials_provider(Credentials::new(
                config.storage_access_key_id.clone(),
                config.storage_secret_access_key.clone(),
                None,
                None,
                "news-wire-config",
            ));
        }

        Self {
            client: aws_sdk_sqs::Client::from_conf(builder.build()),
            queue_url: config.delete_queue_url.clone(),
        }
    }

    /// Long-poll for up to `max_messages` delete requests
    pub async fn receive(&self, max_messages: i32) -> Result<Vec<QueueMessage>, QueueError> {
        if self.queue_url.is_empty() {
            return Err(QueueError::NotConfigured);
        }

        let resp = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(20)
            .send()
            .await
            .map_err(|e| QueueError::Receive(e.into_service_error().to_string()))?;

        let messages = resp
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| match (m.body, m.receipt_handle) {
                (Some(body), Some(receipt_handle)) => Some(QueueMessage {
                    body,
                    receipt_handle,
                }),
                _ => None,
            })
            .collect();

        Ok(messages)
    }

    /// Acknowledge a processed message
    pub async fn ack(&self, receipt_handle: &str) -> Result<(), QueueError> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::Receive(e.into_service_error().to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DeleteQueue for SqsDeleteQueue {
    async fn enqueue(&self, image_key: &str) -> Result<(), QueueError> {
        if self.queue_url.is_empty() {
            return Err(QueueError::NotConfigured);
        }

        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(image_key)
            .send()
            .await
            .map_err(|e| QueueError::Enqueue(e.into_service_error().to_string()))?;

        Ok(())
    }
}
