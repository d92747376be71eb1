//! Delete-queue consumer: pulls image keys off the delete queue and removes
//! the blobs from the object store.
//!
//! One attempt per message. The delete is idempotent (a missing key counts
//! as success) and non-critical, so messages are acknowledged whether or
//! not the delete went through — no dead-letter loops on permanently
//! missing keys.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use news_wire::application::ports::{ObjectStore, QueueError};
use news_wire::infrastructure::{queue::SqsDeleteQueue, storage::S3ObjectStore};
use news_wire::Config;

#[derive(Parser)]
#[command(name = "delete-worker", about = "Consume the image delete queue")]
struct Cli {
    /// Drain whatever is currently queued, then exit
    #[arg(long)]
    once: bool,

    /// Messages per receive batch
    #[arg(long, default_value_t = 10)]
    batch_size: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    if config.delete_queue_url.is_empty() {
        anyhow::bail!("DELETE_QUEUE_URL must be set for the delete worker");
    }

    let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let store = S3ObjectStore::new(&shared, &config, config.storage_bucket.clone());
    let queue = SqsDeleteQueue::new(&shared, &config);

    info!(bucket = %config.storage_bucket, "delete worker started");

    loop {
        let messages = match queue.receive(cli.batch_size).await {
            Ok(messages) => messages,
            Err(QueueError::NotConfigured) => anyhow::bail!("delete queue not configured"),
            Err(e) => {
                warn!(error = %e, "receive failed, retrying");
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                continue;
            }
        };

        if messages.is_empty() && cli.once {
            info!("queue drained");
            return Ok(());
        }

        for message in messages {
            let key = message.body.trim();
            if key.is_empty() {
                warn!("empty delete request, dropping");
            } else {
                match store.delete(key).await {
                    Ok(()) => info!(key, "blob deleted"),
                    Err(e) => warn!(key, error = %e, "blob delete failed, dropping request"),
                }
            }

            // Ack regardless of outcome: one attempt per message
            if let Err(e) = queue.ack(&message.receipt_handle).await {
                warn!(error = %e, "failed to ack message");
            }
        }
    }
}
