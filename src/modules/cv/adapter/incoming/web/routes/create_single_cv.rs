use actix_web::{post, web, Responder};

use super::{decode_photo, error_response, CvSubmission};
use crate::shared::api::ApiResponse;
use crate::shared::identity::VerifiedSubject;
use crate::AppState;

#[post("/api/cvs")]
pub async fn create_single_cv_handler(
    subject: VerifiedSubject,
    req: web::Json<CvSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let photo = match decode_photo(req.photo_upload) {
        Ok(photo) => photo,
        Err(response) => return response,
    };

    match data.cv_engine.create(subject.id, req.cv, photo).await {
        Ok(record) => ApiResponse::created("CV created successfully", record),
        Err(e) => error_response(e),
    }
}
