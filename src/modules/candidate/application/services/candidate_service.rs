use async_trait::async_trait;
use tracing::error;

use crate::candidate::application::error::CandidateError;
use crate::candidate::application::ports::incoming::{CandidateEngine, CandidatePayload};
use crate::candidate::application::ports::outgoing::{
    CandidateRepository, CandidateRepositoryError,
};
use crate::candidate::application::validate;
use crate::candidate::domain::entities::CandidateRecord;
use crate::media::application::ports::outgoing::{AssetStore, AssetUpload};

/// The CV engine's simpler sibling: no owner, no events, no duplicate
/// pre-check. The store's unique index alone guards the email.
pub struct CandidateService<R, A>
where
    R: CandidateRepository,
    A: AssetStore,
{
    repo: R,
    assets: A,
}

impl<R, A> CandidateService<R, A>
where
    R: CandidateRepository,
    A: AssetStore,
{
    pub fn new(repo: R, assets: A) -> Self {
        Self { repo, assets }
    }
}

fn map_repo_err(err: CandidateRepositoryError) -> CandidateError {
    match err {
        CandidateRepositoryError::NotFound => {
            CandidateError::NotFound("No candidate found with this identifier".to_string())
        }
        CandidateRepositoryError::MalformedId => {
            CandidateError::Validation("Malformed candidate identifier".to_string())
        }
        CandidateRepositoryError::DuplicateEmail => {
            CandidateError::Conflict("professional email already in use".to_string())
        }
        CandidateRepositoryError::Database(detail) => {
            error!(detail = %detail, "candidate store failure");
            CandidateError::Storage(detail)
        }
        CandidateRepositoryError::Serialization(detail) => {
            error!(detail = %detail, "candidate store returned an unreadable record");
            CandidateError::Storage(detail)
        }
    }
}

#[async_trait]
impl<R, A> CandidateEngine for CandidateService<R, A>
where
    R: CandidateRepository + Send + Sync,
    A: AssetStore + Send + Sync,
{
    async fn create(
        &self,
        payload: CandidatePayload,
        file: Option<AssetUpload>,
    ) -> Result<CandidateRecord, CandidateError> {
        let mut draft = validate::validate_payload(payload)?;

        if let Some(upload) = file {
            let stored = self.assets.upload(upload).await.map_err(|e| {
                error!(error = %e, "candidate file upload failed");
                CandidateError::Upload(e.to_string())
            })?;
            draft.file = Some(stored.url);
        }

        self.repo.insert(draft).await.map_err(map_repo_err)
    }

    async fn find_all(&self) -> Result<Vec<CandidateRecord>, CandidateError> {
        self.repo.find_all().await.map_err(map_repo_err)
    }

    async fn find_one(&self, id: &str) -> Result<CandidateRecord, CandidateError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repo_err)?
            .ok_or_else(|| {
                CandidateError::NotFound("No candidate found with this identifier".to_string())
            })
    }

    async fn update(
        &self,
        id: &str,
        payload: CandidatePayload,
    ) -> Result<CandidateRecord, CandidateError> {
        let draft = validate::validate_payload(payload)?;
        self.repo.update(id, draft).await.map_err(map_repo_err)
    }

    async fn remove(&self, id: &str) -> Result<(), CandidateError> {
        self.repo.delete(id).await.map_err(map_repo_err)
    }
}
