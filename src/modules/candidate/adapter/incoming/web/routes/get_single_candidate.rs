use actix_web::{get, web, Responder};

use super::error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/candidates/{id}")]
pub async fn get_single_candidate_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.candidate_engine.find_one(&id).await {
        Ok(record) => ApiResponse::success("Candidate retrieved successfully", record),
        Err(e) => error_response(e),
    }
}
