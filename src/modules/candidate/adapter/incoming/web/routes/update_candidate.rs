use actix_web::{patch, web, Responder};

use super::error_response;
use crate::modules::candidate::application::ports::incoming::CandidatePayload;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Wholesale replacement; the stored file URL is untouched.
#[patch("/api/candidates/{id}")]
pub async fn update_candidate_handler(
    path: web::Path<String>,
    req: web::Json<CandidatePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.candidate_engine.update(&id, req.into_inner()).await {
        Ok(record) => ApiResponse::success("Candidate updated successfully", record),
        Err(e) => error_response(e),
    }
}
