mod create_candidate;
mod delete_candidate;
mod get_candidates;
mod get_single_candidate;
mod update_candidate;

pub use create_candidate::create_candidate_handler;
pub use delete_candidate::delete_candidate_handler;
pub use get_candidates::get_candidates_handler;
pub use get_single_candidate::get_single_candidate_handler;
pub use update_candidate::update_candidate_handler;

use actix_web::HttpResponse;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use tracing::error;

use crate::modules::candidate::application::error::CandidateError;
use crate::modules::candidate::application::ports::incoming::CandidatePayload;
use crate::modules::media::application::ports::outgoing::AssetUpload;
use crate::shared::api::ApiResponse;

/// Create body: the candidate fields plus an optional inline document,
/// base64-encoded.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateSubmission {
    #[serde(flatten)]
    pub candidate: CandidatePayload,
    pub file_upload: Option<FilePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilePart {
    pub content_base64: String,
    pub mime_type: String,
}

pub(crate) fn decode_file(part: Option<FilePart>) -> Result<Option<AssetUpload>, HttpResponse> {
    let Some(part) = part else {
        return Ok(None);
    };

    let bytes = BASE64.decode(part.content_base64.trim()).map_err(|_| {
        ApiResponse::bad_request("fileUpload.contentBase64 is not valid base64")
    })?;

    if bytes.is_empty() {
        return Err(ApiResponse::bad_request("fileUpload is empty"));
    }

    let mime_type = if part.mime_type.trim().is_empty() {
        "application/octet-stream".to_string()
    } else {
        part.mime_type
    };

    Ok(Some(AssetUpload { bytes, mime_type }))
}

pub(crate) fn error_response(err: CandidateError) -> HttpResponse {
    match err {
        CandidateError::Validation(msg) => ApiResponse::bad_request(&msg),
        CandidateError::Conflict(msg) => ApiResponse::conflict(&msg),
        CandidateError::NotFound(msg) => ApiResponse::not_found(&msg),
        CandidateError::Upload(msg) => {
            error!("candidate file upload failed: {}", msg);
            ApiResponse::internal_error()
        }
        CandidateError::Storage(msg) => {
            error!("storage failure: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_stubs {
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::modules::candidate::application::error::CandidateError;
    use crate::modules::candidate::application::ports::incoming::{
        CandidateEngine, CandidatePayload,
    };
    use crate::modules::candidate::domain::entities::CandidateRecord;
    use crate::modules::media::application::ports::outgoing::AssetUpload;

    #[derive(Default)]
    pub struct StubCandidateEngine {
        pub create: Option<Result<CandidateRecord, CandidateError>>,
        pub find_all: Option<Result<Vec<CandidateRecord>, CandidateError>>,
        pub find_one: Option<Result<CandidateRecord, CandidateError>>,
        pub update: Option<Result<CandidateRecord, CandidateError>>,
        pub remove: Option<Result<(), CandidateError>>,
    }

    fn stubbed<T: Clone>(
        slot: &Option<Result<T, CandidateError>>,
        op: &str,
    ) -> Result<T, CandidateError> {
        slot.clone().unwrap_or_else(|| panic!("{} not stubbed", op))
    }

    #[async_trait]
    impl CandidateEngine for StubCandidateEngine {
        async fn create(
            &self,
            _payload: CandidatePayload,
            _file: Option<AssetUpload>,
        ) -> Result<CandidateRecord, CandidateError> {
            stubbed(&self.create, "create")
        }

        async fn find_all(&self) -> Result<Vec<CandidateRecord>, CandidateError> {
            stubbed(&self.find_all, "find_all")
        }

        async fn find_one(&self, _id: &str) -> Result<CandidateRecord, CandidateError> {
            stubbed(&self.find_one, "find_one")
        }

        async fn update(
            &self,
            _id: &str,
            _payload: CandidatePayload,
        ) -> Result<CandidateRecord, CandidateError> {
            stubbed(&self.update, "update")
        }

        async fn remove(&self, _id: &str) -> Result<(), CandidateError> {
            stubbed(&self.remove, "remove")
        }
    }

    pub fn app_state(engine: StubCandidateEngine) -> actix_web::web::Data<crate::AppState> {
        actix_web::web::Data::new(crate::AppState {
            cv_engine: Arc::new(
                crate::modules::cv::adapter::incoming::web::routes::test_stubs::StubCvEngine::default(),
            ),
            candidate_engine: Arc::new(engine),
        })
    }
}
