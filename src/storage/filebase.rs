use async_trait::async_trait;
use chrono::Utc;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use crate::config::StorageSettings;
use crate::core::ReportStore;
use crate::storage::locator::{locator_from_response, object_key};
use crate::utils::{AuditError, Result};

/// Filebase (S3-compatible, IPFS-pinned) report store
pub struct FilebaseStore {
    bucket: Box<Bucket>,
    key_prefix: String,
    gateway: String,
}

impl FilebaseStore {
    pub fn new(settings: &StorageSettings) -> Result<Self> {
        let credentials = Credentials::new(
            Some(settings.access_key_id.as_str()),
            Some(settings.secret_access_key.as_str()),
            None,
            None,
            None,
        )
        .map_err(|e| AuditError::Config(format!("storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: settings.region.clone(),
            endpoint: settings.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&settings.bucket, region, credentials)
            .map_err(|e| AuditError::Config(format!("storage bucket: {}", e)))?
            .with_path_style();
        bucket.set_request_timeout(Some(settings.timeout()));

        tracing::info!("Report store: bucket '{}' at {}", settings.bucket, settings.endpoint);

        Ok(Self {
            bucket,
            key_prefix: settings.key_prefix.clone(),
            gateway: settings.gateway.clone(),
        })
    }
}

#[async_trait]
impl ReportStore for FilebaseStore {
    fn name(&self) -> &'static str {
        "filebase"
    }

    async fn put_report(&self, report: &str) -> Result<String> {
        let key = object_key(&self.key_prefix, Utc::now().timestamp_millis());
        tracing::debug!("Uploading {} bytes to {}", report.len(), key);

        let response = self
            .bucket
            .put_object_with_content_type(&key, report.as_bytes(), "text/plain")
            .await
            .map_err(|e| AuditError::Storage(e.to_string()))?;

        locator_from_response(response.status_code(), &response.headers(), &self.gateway)
    }
}
