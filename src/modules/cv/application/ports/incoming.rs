use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cv::application::error::CvError;
use crate::cv::application::ports::outgoing::OwnerIdentity;
use crate::cv::domain::entities::{CvRecord, Education, Experience, Language, Skill};
use crate::media::application::ports::outgoing::AssetUpload;

/// Raw submission shape: everything defaults so missing fields reach
/// the validation pass (which produces proper violation messages)
/// instead of being rejected opaquely during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvPayload {
    pub personal_info: PersonalInfoPayload,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub professional_title: String,
    pub profile_summary: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
    pub search: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: String::new(),
        }
    }
}

/// Paginated listing result; also the wire shape of the list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvPage {
    pub data: Vec<CvRecord>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// "My CV" view: the record plus the owner's display identity when the
/// directory knows the subject.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyCvView {
    #[serde(flatten)]
    pub record: CvRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_identity: Option<OwnerIdentity>,
}

/// The CV record engine: lifecycle, queries and the create/update/notify
/// protocol.
#[async_trait]
pub trait CvEngine: Send + Sync {
    async fn create(
        &self,
        owner: Uuid,
        payload: CvPayload,
        photo: Option<AssetUpload>,
    ) -> Result<CvRecord, CvError>;

    async fn find_all(&self, query: PageQuery) -> Result<CvPage, CvError>;

    async fn find_one(&self, id: &str) -> Result<CvRecord, CvError>;

    /// Pre-check lookup; absence is a normal outcome, never an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<CvRecord>, CvError>;

    async fn find_mine(&self, owner: Uuid) -> Result<MyCvView, CvError>;

    async fn update_owned(
        &self,
        id: &str,
        owner: Uuid,
        payload: CvPayload,
        photo: Option<AssetUpload>,
    ) -> Result<CvRecord, CvError>;

    /// Privileged unscoped update.
    async fn update(&self, id: &str, payload: CvPayload) -> Result<CvRecord, CvError>;

    async fn remove(&self, id: &str) -> Result<(), CvError>;
}
