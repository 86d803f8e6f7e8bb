use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Display identity of the subject owning a CV, attached read-only to
/// the "my CV" lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIdentity {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum OwnerDirectoryError {
    #[error("database error: {0}")]
    Database(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    async fn find(&self, owner: Uuid) -> Result<Option<OwnerIdentity>, OwnerDirectoryError>;
}
