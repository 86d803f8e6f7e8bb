use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::domain::entities::{CvRecord, Education, Experience, Language, PersonalInfo, Skill};

/// Store signals the engine must be able to tell apart. `DuplicateEmail`
/// and `MalformedId` are deliberately distinct from `Database` so the
/// engine can re-classify them instead of leaking storage errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CvRepositoryError {
    #[error("CV not found")]
    NotFound,

    #[error("malformed CV identifier")]
    MalformedId,

    #[error("email already in use")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A validated, normalized CV ready for persistence: every required
/// field is non-empty and the email is lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct CvDraft {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default)]
pub struct CvListFilter {
    /// Case-insensitive substring matched against email, first name,
    /// last name and professional title. Empty matches everything.
    pub search: String,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit
    }
}

#[async_trait]
pub trait CvRepository: Send + Sync {
    /// Persists a new record with `owner` bound. The store's unique
    /// index on the email column is the authoritative uniqueness guard;
    /// a violation surfaces as `DuplicateEmail`.
    async fn insert(&self, owner: Uuid, draft: CvDraft) -> Result<CvRecord, CvRepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<CvRecord>, CvRepositoryError>;

    /// Case-insensitive exact lookup; callers pass any casing.
    async fn find_by_email(&self, email: &str) -> Result<Option<CvRecord>, CvRepositoryError>;

    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<CvRecord>, CvRepositoryError>;

    /// Page of matching records plus the total match count ignoring
    /// pagination, in a stable newest-first order.
    async fn list(
        &self,
        filter: &CvListFilter,
        page: &PageRequest,
    ) -> Result<(Vec<CvRecord>, u64), CvRepositoryError>;

    /// Wholesale replacement of the mutable fields, unscoped.
    async fn update(&self, id: &str, draft: CvDraft) -> Result<CvRecord, CvRepositoryError>;

    /// Wholesale replacement gated on `id AND owner` evaluated as a
    /// single store predicate; an ownership mismatch is `NotFound`.
    async fn update_owned(
        &self,
        id: &str,
        owner: Uuid,
        draft: CvDraft,
    ) -> Result<CvRecord, CvRepositoryError>;

    /// Permanent delete; deleting an absent id is `NotFound`.
    async fn delete(&self, id: &str) -> Result<(), CvRepositoryError>;
}
