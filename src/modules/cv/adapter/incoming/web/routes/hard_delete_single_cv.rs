use actix_web::{delete, web, Responder};

use super::error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Permanent delete. No notification is emitted for deletions.
#[delete("/api/cvs/{id}")]
pub async fn hard_delete_single_cv_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.cv_engine.remove(&id).await {
        Ok(()) => ApiResponse::ok_message("CV deleted successfully"),
        Err(e) => error_response(e),
    }
}
