use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;

use crate::application::ports::{ObjectStore, StoreError, StoredObject};
use crate::config::Config;

/// Object store adapter for S3-compatible endpoints.
///
/// One instance per bucket; the news-image store and the static-page origin
/// are separate instances over the same credentials.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3ObjectStore {
    pub fn new(shared: &aws_config::SdkConfig, config: &Config, bucket: impl Into<String>) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(shared)
            .region(Region::new(config.storage_region.clone()))
            .endpoint_url(&config.storage_endpoint)
            .force_path_style(true);

        // Static credentials when configured; otherwise the default chain
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
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: bucket.into(),
            endpoint: config.storage_endpoint.clone(),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.into_service_error().to_string()))?;

        Ok(self.public_url(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        // DeleteObject is idempotent at the protocol level: a missing key
        // is not an error, which is exactly what the lifecycle policy wants
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<StoredObject, StoreError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    StoreError::NotFound(key.to_string())
                } else {
                    StoreError::Request(service.to_string())
                }
            })?;

        let content_type = resp.content_type().map(|s| s.to_string());
        let bytes = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(StoredObject {
            bytes,
            content_type,
        })
    }
}
