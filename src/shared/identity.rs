// src/shared/identity.rs
//
// Authentication is handled upstream (API gateway). By the time a
// request reaches this service the subject has already been verified;
// the gateway forwards the subject's identity in trusted headers.
// This extractor is the only place those headers are read.

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::shared::api::ApiResponse;

pub const SUBJECT_ID_HEADER: &str = "x-subject-id";
pub const SUBJECT_NAME_HEADER: &str = "x-subject-name";
pub const SUBJECT_EMAIL_HEADER: &str = "x-subject-email";

/// The verified identity of the caller, as asserted by the gateway.
#[derive(Debug, Clone)]
pub struct VerifiedSubject {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn header_string(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FromRequest for VerifiedSubject {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw_id = match header_string(req, SUBJECT_ID_HEADER) {
            Some(v) => v,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Missing verified subject identity",
                ))));
            }
        };

        let id = match Uuid::parse_str(&raw_id) {
            Ok(id) => id,
            Err(_) => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Malformed subject identity",
                ))));
            }
        };

        ready(Ok(VerifiedSubject {
            id,
            display_name: header_string(req, SUBJECT_NAME_HEADER),
            email: header_string(req, SUBJECT_EMAIL_HEADER),
        }))
    }
}
