use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::candidate::application::error::CandidateError;
use crate::candidate::domain::entities::CandidateRecord;
use crate::media::application::ports::outgoing::AssetUpload;

/// Raw submission; `gender` stays a free string here so the validation
/// pass can produce a proper message for unknown values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePayload {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: String,
    pub full_address: String,
    pub phone_number: String,
    pub professional_email: String,
    pub nationality: String,
    pub country: String,
}

#[async_trait]
pub trait CandidateEngine: Send + Sync {
    async fn create(
        &self,
        payload: CandidatePayload,
        file: Option<AssetUpload>,
    ) -> Result<CandidateRecord, CandidateError>;

    /// Unfiltered listing, newest first.
    async fn find_all(&self) -> Result<Vec<CandidateRecord>, CandidateError>;

    async fn find_one(&self, id: &str) -> Result<CandidateRecord, CandidateError>;

    /// Wholesale replacement; no file handling on update.
    async fn update(
        &self,
        id: &str,
        payload: CandidatePayload,
    ) -> Result<CandidateRecord, CandidateError>;

    async fn remove(&self, id: &str) -> Result<(), CandidateError>;
}
