use actix_web::{post, web, Responder};

use super::{decode_file, error_response, CandidateSubmission};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/candidates")]
pub async fn create_candidate_handler(
    req: web::Json<CandidateSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let file = match decode_file(req.file_upload) {
        Ok(file) => file,
        Err(response) => return response,
    };

    match data.candidate_engine.create(req.candidate, file).await {
        Ok(record) => ApiResponse::created("Candidate created successfully", record),
        Err(e) => error_response(e),
    }
}
