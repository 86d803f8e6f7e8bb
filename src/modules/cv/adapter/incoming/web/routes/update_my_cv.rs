use actix_web::{patch, web, Responder};

use super::{decode_photo, error_response, CvSubmission};
use crate::shared::api::ApiResponse;
use crate::shared::identity::VerifiedSubject;
use crate::AppState;

/// Owner-scoped replacement. The engine evaluates id and owner as one
/// predicate, so another subject's CV id yields 404, never 403.
#[patch("/api/cvs/me/{id}")]
pub async fn update_my_cv_handler(
    subject: VerifiedSubject,
    path: web::Path<String>,
    req: web::Json<CvSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let photo = match decode_photo(req.photo_upload) {
        Ok(photo) => photo,
        Err(response) => return response,
    };

    match data
        .cv_engine
        .update_owned(&id, subject.id, req.cv, photo)
        .await
    {
        Ok(record) => ApiResponse::success("CV updated successfully", record),
        Err(e) => error_response(e),
    }
}
