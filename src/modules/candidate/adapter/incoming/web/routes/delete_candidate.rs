use actix_web::{delete, web, Responder};

use super::error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/candidates/{id}")]
pub async fn delete_candidate_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.candidate_engine.remove(&id).await {
        Ok(()) => ApiResponse::ok_message("Candidate deleted successfully"),
        Err(e) => error_response(e),
    }
}
