//! Pure validation pass: a raw payload either becomes a normalized
//! draft or a list of violations folded into one `CvError::Validation`.
//! No framework types, no I/O.

use email_address::EmailAddress;

use crate::cv::application::error::CvError;
use crate::cv::application::ports::incoming::CvPayload;
use crate::cv::application::ports::outgoing::CvDraft;
use crate::cv::domain::entities::PersonalInfo;

fn require(violations: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(format!("{} is required", field));
    }
}

pub fn validate_payload(payload: CvPayload) -> Result<CvDraft, CvError> {
    let mut violations: Vec<String> = Vec::new();
    let p = payload.personal_info;

    let email = p.email.trim().to_lowercase();
    if email.is_empty() {
        violations.push("personalInfo.email is required".to_string());
    } else if email.parse::<EmailAddress>().is_err() {
        violations.push("personalInfo.email is not a valid email address".to_string());
    }

    require(&mut violations, "personalInfo.firstName", &p.first_name);
    require(&mut violations, "personalInfo.lastName", &p.last_name);
    require(&mut violations, "personalInfo.phone", &p.phone);
    require(&mut violations, "personalInfo.address", &p.address);
    require(&mut violations, "personalInfo.city", &p.city);
    require(&mut violations, "personalInfo.zipCode", &p.zip_code);
    require(&mut violations, "personalInfo.country", &p.country);
    require(
        &mut violations,
        "personalInfo.professionalTitle",
        &p.professional_title,
    );
    require(
        &mut violations,
        "personalInfo.profileSummary",
        &p.profile_summary,
    );

    if !violations.is_empty() {
        return Err(CvError::Validation(violations.join("; ")));
    }

    Ok(CvDraft {
        personal_info: PersonalInfo {
            first_name: p.first_name.trim().to_string(),
            last_name: p.last_name.trim().to_string(),
            email,
            phone: p.phone.trim().to_string(),
            address: p.address.trim().to_string(),
            city: p.city.trim().to_string(),
            zip_code: p.zip_code.trim().to_string(),
            country: p.country.trim().to_string(),
            professional_title: p.professional_title.trim().to_string(),
            profile_summary: p.profile_summary.trim().to_string(),
            photo: p.photo,
        },
        experiences: payload.experiences,
        education: payload.education,
        skills: payload.skills,
        languages: payload.languages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::application::ports::incoming::PersonalInfoPayload;

    fn full_payload() -> CvPayload {
        CvPayload {
            personal_info: PersonalInfoPayload {
                first_name: "  Jean ".to_string(),
                last_name: "Dupont".to_string(),
                email: "Jean.Dupont@Example.COM".to_string(),
                phone: "+33 6 12 34 56 78".to_string(),
                address: "12 rue des Lilas".to_string(),
                city: "Paris".to_string(),
                zip_code: "75011".to_string(),
                country: "France".to_string(),
                professional_title: "Backend Engineer".to_string(),
                profile_summary: "Ten years building services.".to_string(),
                photo: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_email_to_lowercase_and_trims_fields() {
        let draft = validate_payload(full_payload()).unwrap();
        assert_eq!(draft.personal_info.email, "jean.dupont@example.com");
        assert_eq!(draft.personal_info.first_name, "Jean");
    }

    #[test]
    fn missing_email_is_a_violation() {
        let mut payload = full_payload();
        payload.personal_info.email = String::new();
        let err = validate_payload(payload).unwrap_err();
        match err {
            CvError::Validation(msg) => assert!(msg.contains("personalInfo.email is required")),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn malformed_email_is_a_violation() {
        let mut payload = full_payload();
        payload.personal_info.email = "not-an-email".to_string();
        let err = validate_payload(payload).unwrap_err();
        match err {
            CvError::Validation(msg) => assert!(msg.contains("not a valid email")),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn collects_all_violations_in_one_pass() {
        let payload = CvPayload::default();
        let err = validate_payload(payload).unwrap_err();
        match err {
            CvError::Validation(msg) => {
                assert!(msg.contains("personalInfo.email"));
                assert!(msg.contains("personalInfo.firstName"));
                assert!(msg.contains("personalInfo.profileSummary"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn nested_arrays_pass_through_untouched() {
        let mut payload = full_payload();
        payload.skills = vec![crate::cv::domain::entities::Skill {
            name: "Go".to_string(),
            level: crate::cv::domain::entities::SkillLevel::Expert,
        }];
        let draft = validate_payload(payload).unwrap();
        assert_eq!(draft.skills.len(), 1);
        assert_eq!(draft.skills[0].name, "Go");
    }
}
