use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::media::application::ports::outgoing::{
    AssetStore, AssetStoreError, AssetUpload, StoredAsset,
};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

fn map_upload_error(msg: &str) -> AssetStoreError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        AssetStoreError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        AssetStoreError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") || m.contains("credential") {
        AssetStoreError::Configuration
    } else {
        AssetStoreError::Infrastructure
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object_bytes(bucket_resource, object_name, bytes)
            .await
    }
}

/// Production implementation of the AssetStore port against Google
/// Cloud Storage. Objects land under `{prefix}/{uuid}.{ext}` in the
/// configured bucket and are served from the bucket's public hostname.
#[derive(Clone)]
pub struct GcsAssetStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    prefix: String,
}

impl GcsAssetStore {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str, prefix: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        }
    }

    fn object_name(&self, mime_type: &str) -> String {
        format!(
            "{}/{}.{}",
            self.prefix,
            Uuid::new_v4(),
            extension_for(mime_type)
        )
    }
}

#[async_trait]
impl AssetStore for GcsAssetStore {
    async fn upload(&self, upload: AssetUpload) -> Result<StoredAsset, AssetStoreError> {
        let client = self.get_client().await.map_err(|e| {
            tracing::error!("GCS client initialization failed: {:?}", e);
            AssetStoreError::Configuration
        })?;

        let object = self.object_name(&upload.mime_type);
        let bucket = bucket_resource(&self.bucket);

        client
            .upload_object_bytes(&bucket, &object, upload.bytes)
            .await
            .map_err(|e| map_upload_error(&e))?;

        Ok(StoredAsset {
            url: public_url(&self.bucket, &object),
        })
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_buffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
