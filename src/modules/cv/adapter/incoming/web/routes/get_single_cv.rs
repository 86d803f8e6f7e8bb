use actix_web::{get, web, Responder};

use super::error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs/{id}")]
pub async fn get_single_cv_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.cv_engine.find_one(&id).await {
        Ok(record) => ApiResponse::success("CV retrieved successfully", record),
        Err(e) => error_response(e),
    }
}
