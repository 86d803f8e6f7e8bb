use actix_web::{get, web, Responder};

use super::error_response;
use crate::shared::api::ApiResponse;
use crate::shared::identity::VerifiedSubject;
use crate::AppState;

/// Must be registered before the `/api/cvs/{id}` routes so that "me"
/// is not captured as an id.
#[get("/api/cvs/me")]
pub async fn get_my_cv_handler(
    subject: VerifiedSubject,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv_engine.find_mine(subject.id).await {
        Ok(view) => ApiResponse::success("CV retrieved successfully", view),
        Err(e) => error_response(e),
    }
}
