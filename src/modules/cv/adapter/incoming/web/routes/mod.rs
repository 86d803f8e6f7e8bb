mod create_single_cv;
mod get_cvs;
mod get_my_cv;
mod get_single_cv;
mod hard_delete_single_cv;
mod update_my_cv;
mod update_single_cv;

pub use create_single_cv::create_single_cv_handler;
pub use get_cvs::get_cvs_handler;
pub use get_my_cv::get_my_cv_handler;
pub use get_single_cv::get_single_cv_handler;
pub use hard_delete_single_cv::hard_delete_single_cv_handler;
pub use update_my_cv::update_my_cv_handler;
pub use update_single_cv::update_single_cv_handler;

use actix_web::HttpResponse;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use tracing::error;

use crate::modules::cv::application::error::CvError;
use crate::modules::cv::application::ports::incoming::CvPayload;
use crate::modules::media::application::ports::outgoing::AssetUpload;
use crate::shared::api::ApiResponse;

/// JSON body of the create and update endpoints: the CV fields plus an
/// optional inline photo, base64-encoded.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvSubmission {
    #[serde(flatten)]
    pub cv: CvPayload,
    pub photo_upload: Option<PhotoPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoPart {
    pub content_base64: String,
    pub mime_type: String,
}

pub(crate) fn decode_photo(part: Option<PhotoPart>) -> Result<Option<AssetUpload>, HttpResponse> {
    let Some(part) = part else {
        return Ok(None);
    };

    let bytes = BASE64.decode(part.content_base64.trim()).map_err(|_| {
        ApiResponse::bad_request("photoUpload.contentBase64 is not valid base64")
    })?;

    if bytes.is_empty() {
        return Err(ApiResponse::bad_request("photoUpload is empty"));
    }

    let mime_type = if part.mime_type.trim().is_empty() {
        "application/octet-stream".to_string()
    } else {
        part.mime_type
    };

    Ok(Some(AssetUpload { bytes, mime_type }))
}

pub(crate) fn error_response(err: CvError) -> HttpResponse {
    match err {
        CvError::Validation(msg) => ApiResponse::bad_request(&msg),
        CvError::Conflict(msg) => ApiResponse::conflict(&msg),
        CvError::NotFound(msg) => ApiResponse::not_found(&msg),
        CvError::Upload(msg) => {
            error!("photo upload failed: {}", msg);
            ApiResponse::internal_error()
        }
        CvError::Storage(msg) => {
            error!("storage failure: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_stubs {
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::cv::application::error::CvError;
    use crate::modules::cv::application::ports::incoming::{
        CvEngine, CvPage, CvPayload, MyCvView, PageQuery,
    };
    use crate::modules::cv::domain::entities::CvRecord;
    use crate::modules::media::application::ports::outgoing::AssetUpload;

    /// Per-operation canned results; a handler test sets only the field
    /// its route exercises.
    #[derive(Default)]
    pub struct StubCvEngine {
        pub create: Option<Result<CvRecord, CvError>>,
        pub find_all: Option<Result<CvPage, CvError>>,
        pub find_one: Option<Result<CvRecord, CvError>>,
        pub find_by_email: Option<Result<Option<CvRecord>, CvError>>,
        pub find_mine: Option<Result<MyCvView, CvError>>,
        pub update_owned: Option<Result<CvRecord, CvError>>,
        pub update: Option<Result<CvRecord, CvError>>,
        pub remove: Option<Result<(), CvError>>,
    }

    fn stubbed<T: Clone>(slot: &Option<Result<T, CvError>>, op: &str) -> Result<T, CvError> {
        slot.clone().unwrap_or_else(|| panic!("{} not stubbed", op))
    }

    #[async_trait]
    impl CvEngine for StubCvEngine {
        async fn create(
            &self,
            _owner: Uuid,
            _payload: CvPayload,
            _photo: Option<AssetUpload>,
        ) -> Result<CvRecord, CvError> {
            stubbed(&self.create, "create")
        }

        async fn find_all(&self, _query: PageQuery) -> Result<CvPage, CvError> {
            stubbed(&self.find_all, "find_all")
        }

        async fn find_one(&self, _id: &str) -> Result<CvRecord, CvError> {
            stubbed(&self.find_one, "find_one")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<CvRecord>, CvError> {
            stubbed(&self.find_by_email, "find_by_email")
        }

        async fn find_mine(&self, _owner: Uuid) -> Result<MyCvView, CvError> {
            stubbed(&self.find_mine, "find_mine")
        }

        async fn update_owned(
            &self,
            _id: &str,
            _owner: Uuid,
            _payload: CvPayload,
            _photo: Option<AssetUpload>,
        ) -> Result<CvRecord, CvError> {
            stubbed(&self.update_owned, "update_owned")
        }

        async fn update(&self, _id: &str, _payload: CvPayload) -> Result<CvRecord, CvError> {
            stubbed(&self.update, "update")
        }

        async fn remove(&self, _id: &str) -> Result<(), CvError> {
            stubbed(&self.remove, "remove")
        }
    }

    pub fn app_state(engine: StubCvEngine) -> actix_web::web::Data<crate::AppState> {
        actix_web::web::Data::new(crate::AppState {
            cv_engine: Arc::new(engine),
            candidate_engine: Arc::new(
                crate::modules::candidate::adapter::incoming::web::routes::test_stubs::StubCandidateEngine::default(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_photo_accepts_valid_base64() {
        let upload = decode_photo(Some(PhotoPart {
            content_base64: BASE64.encode([1u8, 2, 3]),
            mime_type: "image/png".to_string(),
        }))
        .unwrap()
        .unwrap();

        assert_eq!(upload.bytes, vec![1, 2, 3]);
        assert_eq!(upload.mime_type, "image/png");
    }

    #[test]
    fn decode_photo_defaults_missing_mime_type() {
        let upload = decode_photo(Some(PhotoPart {
            content_base64: BASE64.encode([1u8]),
            mime_type: "  ".to_string(),
        }))
        .unwrap()
        .unwrap();

        assert_eq!(upload.mime_type, "application/octet-stream");
    }

    #[test]
    fn decode_photo_rejects_garbage() {
        assert!(decode_photo(Some(PhotoPart {
            content_base64: "!!not base64!!".to_string(),
            mime_type: "image/png".to_string(),
        }))
        .is_err());
    }

    #[test]
    fn absent_photo_decodes_to_none() {
        assert!(decode_photo(None).unwrap().is_none());
    }
}
