use actix_web::{get, web, HttpResponse, Responder};

use super::error_response;
use crate::AppState;

/// Unfiltered newest-first listing; the array itself is the body.
#[get("/api/candidates")]
pub async fn get_candidates_handler(data: web::Data<AppState>) -> impl Responder {
    match data.candidate_engine.find_all().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => error_response(e),
    }
}
