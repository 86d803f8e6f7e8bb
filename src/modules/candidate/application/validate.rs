//! Validation pass for candidate submissions, mirroring the CV one:
//! collect every violation, then normalize into a draft.

use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

use crate::candidate::application::error::CandidateError;
use crate::candidate::application::ports::incoming::CandidatePayload;
use crate::candidate::application::ports::outgoing::CandidateDraft;
use crate::candidate::domain::entities::Gender;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{7,20}$").expect("phone pattern is valid"));

fn require(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(format!("{} is required", field));
    }
}

pub fn validate_payload(payload: CandidatePayload) -> Result<CandidateDraft, CandidateError> {
    let mut violations: Vec<String> = Vec::new();

    let full_name = payload.full_name.trim().to_string();
    if full_name.is_empty() {
        violations.push("fullName is required".to_string());
    } else if full_name.chars().count() < 2 || full_name.chars().count() > 100 {
        violations.push("fullName must be between 2 and 100 characters".to_string());
    }

    let date_of_birth = payload.date_of_birth;
    if date_of_birth.is_none() {
        violations.push("dateOfBirth is required".to_string());
    }

    let gender = match Gender::parse(payload.gender.trim()) {
        Some(gender) => Some(gender),
        None => {
            violations.push("gender must be one of Male, Female, Other".to_string());
            None
        }
    };

    let phone_number = payload.phone_number.trim().to_string();
    if phone_number.is_empty() {
        violations.push("phoneNumber is required".to_string());
    } else if !PHONE_PATTERN.is_match(&phone_number) {
        violations.push("phoneNumber is not a valid phone number".to_string());
    }

    let professional_email = payload.professional_email.trim().to_lowercase();
    if professional_email.is_empty() {
        violations.push("professionalEmail is required".to_string());
    } else if professional_email.parse::<EmailAddress>().is_err() {
        violations.push("professionalEmail is not a valid email address".to_string());
    }

    require(&mut violations, "fullAddress", &payload.full_address);
    require(&mut violations, "nationality", &payload.nationality);
    require(&mut violations, "country", &payload.country);

    match (date_of_birth, gender) {
        (Some(date_of_birth), Some(gender)) if violations.is_empty() => Ok(CandidateDraft {
            full_name,
            date_of_birth,
            gender,
            full_address: payload.full_address.trim().to_string(),
            phone_number,
            professional_email,
            nationality: payload.nationality.trim().to_string(),
            country: payload.country.trim().to_string(),
            file: None,
        }),
        _ => Err(CandidateError::Validation(violations.join("; "))),
    }
}
