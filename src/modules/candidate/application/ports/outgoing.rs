use async_trait::async_trait;
use chrono::NaiveDate;

use crate::candidate::domain::entities::{CandidateRecord, Gender};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CandidateRepositoryError {
    #[error("candidate not found")]
    NotFound,

    #[error("malformed candidate identifier")]
    MalformedId,

    #[error("professional email already in use")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Validated, normalized candidate data ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDraft {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub full_address: String,
    pub phone_number: String,
    pub professional_email: String,
    pub nationality: String,
    pub country: String,
    pub file: Option<String>,
}

/// No pre-check on the engine side; the unique index on the
/// professional email column is the only duplicate guard.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn insert(
        &self,
        draft: CandidateDraft,
    ) -> Result<CandidateRecord, CandidateRepositoryError>;

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<CandidateRecord>, CandidateRepositoryError>;

    /// All candidates, newest first.
    async fn find_all(&self) -> Result<Vec<CandidateRecord>, CandidateRepositoryError>;

    async fn update(
        &self,
        id: &str,
        draft: CandidateDraft,
    ) -> Result<CandidateRecord, CandidateRepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), CandidateRepositoryError>;
}
