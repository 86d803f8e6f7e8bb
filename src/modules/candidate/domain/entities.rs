use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flat candidate record. Unlike a CV there is no owning subject and
/// no nested sections; `professional_email` is the unique key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: Uuid,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub full_address: String,
    pub phone_number: String,
    pub professional_email: String,
    pub nationality: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::sample_candidate;
    use super::*;

    #[test]
    fn candidate_serializes_camel_case() {
        let json = serde_json::to_value(sample_candidate()).unwrap();
        assert!(json["fullName"].is_string());
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["professionalEmail"], "amina.benali@example.com");
        assert!(json.get("file").is_none());
    }

    #[test]
    fn gender_round_trips_through_strings() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("unknown"), None);
    }
}
