use actix_web::{patch, web, Responder};

use super::error_response;
use crate::modules::cv::application::ports::incoming::CvPayload;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unscoped replacement by id. No photo handling here; the inline
/// upload only rides on the owner-scoped endpoints.
#[patch("/api/cvs/{id}")]
pub async fn update_single_cv_handler(
    path: web::Path<String>,
    req: web::Json<CvPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.cv_engine.update(&id, req.into_inner()).await {
        Ok(record) => ApiResponse::success("CV updated successfully", record),
        Err(e) => error_response(e),
    }
}
