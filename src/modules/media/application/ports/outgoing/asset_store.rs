use async_trait::async_trait;

/// A binary blob handed to the uploader together with its mime type.
/// PDF vs image handling is the uploader's concern, not the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// What the uploader hands back on success: a public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub url: String,
}

/// Upload failure is opaque to callers; the taxonomy below exists for
/// operator logs, not for branching.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AssetStoreError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,

    #[error("Infrastructure error occurred")]
    Infrastructure,
}

/// Port for the external object-storage collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Uploads the blob and returns its public URL.
    async fn upload(&self, upload: AssetUpload) -> Result<StoredAsset, AssetStoreError>;
}
