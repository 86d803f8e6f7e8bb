use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

use crate::cv::application::error::CvError;
use crate::cv::application::ports::incoming::{CvEngine, CvPage, CvPayload, MyCvView, PageQuery};
use crate::cv::application::ports::outgoing::{
    CvDraft, CvListFilter, CvRepository, CvRepositoryError, OwnerDirectory, PageRequest,
};
use crate::cv::application::validate;
use crate::cv::domain::entities::CvRecord;
use crate::media::application::ports::outgoing::{AssetStore, AssetUpload};
use crate::realtime::{CvEvent, EventPublisher};

/// Orchestrates the CV lifecycle against the store, the asset uploader
/// and the notifier. All collaborators are injected; the service itself
/// holds no state.
pub struct CvService<R, A, D, N>
where
    R: CvRepository,
    A: AssetStore,
    D: OwnerDirectory,
    N: EventPublisher,
{
    repo: R,
    assets: A,
    directory: D,
    notifier: N,
}

impl<R, A, D, N> CvService<R, A, D, N>
where
    R: CvRepository,
    A: AssetStore,
    D: OwnerDirectory,
    N: EventPublisher,
{
    pub fn new(repo: R, assets: A, directory: D, notifier: N) -> Self {
        Self {
            repo,
            assets,
            directory,
            notifier,
        }
    }

    /// Upload must complete before any write is attempted so that a
    /// failed upload never produces a partial record.
    async fn attach_photo(
        &self,
        draft: &mut CvDraft,
        photo: Option<AssetUpload>,
    ) -> Result<(), CvError> {
        if let Some(upload) = photo {
            let stored = self.assets.upload(upload).await.map_err(|e| {
                error!(error = %e, "photo upload failed");
                CvError::Upload(e.to_string())
            })?;
            draft.personal_info.photo = Some(stored.url);
        }
        Ok(())
    }
}

fn map_repo_err(err: CvRepositoryError) -> CvError {
    match err {
        CvRepositoryError::NotFound => {
            CvError::NotFound("No CV found with this identifier".to_string())
        }
        CvRepositoryError::MalformedId => {
            CvError::Validation("Malformed CV identifier".to_string())
        }
        // Uniqueness violations are an expected conflict, never an incident.
        CvRepositoryError::DuplicateEmail => {
            CvError::Conflict("email already in use".to_string())
        }
        CvRepositoryError::Database(detail) => {
            error!(detail = %detail, "CV store failure");
            CvError::Storage(detail)
        }
        CvRepositoryError::Serialization(detail) => {
            error!(detail = %detail, "CV store returned an unreadable record");
            CvError::Storage(detail)
        }
    }
}

#[async_trait]
impl<R, A, D, N> CvEngine for CvService<R, A, D, N>
where
    R: CvRepository + Send + Sync,
    A: AssetStore + Send + Sync,
    D: OwnerDirectory + Send + Sync,
    N: EventPublisher + Send + Sync,
{
    async fn create(
        &self,
        owner: Uuid,
        payload: CvPayload,
        photo: Option<AssetUpload>,
    ) -> Result<CvRecord, CvError> {
        let mut draft = validate::validate_payload(payload)?;
        self.attach_photo(&mut draft, photo).await?;

        // Friendly pre-check; the store's unique index stays the
        // authoritative guard for racing writers.
        let existing = self
            .repo
            .find_by_email(&draft.personal_info.email)
            .await
            .map_err(map_repo_err)?;
        if existing.is_some() {
            return Err(CvError::Conflict("email already in use".to_string()));
        }

        let record = self.repo.insert(owner, draft).await.map_err(map_repo_err)?;

        // Best-effort fan-out; never affects the reported outcome.
        self.notifier.publish(CvEvent::CvCreated(record.clone()));

        Ok(record)
    }

    async fn find_all(&self, query: PageQuery) -> Result<CvPage, CvError> {
        let page = PageRequest {
            page: query.page.max(1),
            limit: query.limit.max(1),
        };
        let filter = CvListFilter {
            search: query.search,
        };

        let (data, total) = self.repo.list(&filter, &page).await.map_err(map_repo_err)?;

        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(page.limit)
        };

        Ok(CvPage {
            data,
            total,
            page: page.page,
            limit: page.limit,
            total_pages,
        })
    }

    async fn find_one(&self, id: &str) -> Result<CvRecord, CvError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repo_err)?
            .ok_or_else(|| CvError::NotFound("No CV found with this identifier".to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<CvRecord>, CvError> {
        self.repo.find_by_email(email).await.map_err(map_repo_err)
    }

    async fn find_mine(&self, owner: Uuid) -> Result<MyCvView, CvError> {
        let record = self
            .repo
            .find_by_owner(owner)
            .await
            .map_err(map_repo_err)?
            .ok_or_else(|| CvError::NotFound("No CV found for this subject".to_string()))?;

        // Read-only decoration; a directory miss or failure attaches
        // nothing rather than failing the lookup.
        let owner_identity = match self.directory.find(owner).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "owner directory lookup failed");
                None
            }
        };

        Ok(MyCvView {
            record,
            owner_identity,
        })
    }

    async fn update_owned(
        &self,
        id: &str,
        owner: Uuid,
        payload: CvPayload,
        photo: Option<AssetUpload>,
    ) -> Result<CvRecord, CvError> {
        let mut draft = validate::validate_payload(payload)?;
        self.attach_photo(&mut draft, photo).await?;

        let record = self
            .repo
            .update_owned(id, owner, draft)
            .await
            .map_err(map_repo_err)?;

        self.notifier.publish(CvEvent::CvUpdated(record.clone()));

        Ok(record)
    }

    async fn update(&self, id: &str, payload: CvPayload) -> Result<CvRecord, CvError> {
        let draft = validate::validate_payload(payload)?;

        let record = self.repo.update(id, draft).await.map_err(map_repo_err)?;

        self.notifier.publish(CvEvent::CvUpdated(record.clone()));

        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<(), CvError> {
        self.repo.delete(id).await.map_err(map_repo_err)
    }
}
