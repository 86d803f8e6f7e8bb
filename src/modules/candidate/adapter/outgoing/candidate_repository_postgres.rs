use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::candidate::adapter::outgoing::sea_orm_entity::{
    self as candidates, ActiveModel, Column, Entity,
};
use crate::modules::candidate::application::ports::outgoing::{
    CandidateDraft, CandidateRepository, CandidateRepositoryError,
};
use crate::modules::candidate::domain::entities::{CandidateRecord, Gender};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CandidateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CandidateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CandidateRepository for CandidateRepositoryPostgres {
    async fn insert(
        &self,
        draft: CandidateDraft,
    ) -> Result<CandidateRecord, CandidateRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(draft.full_name),
            date_of_birth: Set(draft.date_of_birth),
            gender: Set(draft.gender.as_str().to_string()),
            full_address: Set(draft.full_address),
            phone_number: Set(draft.phone_number),
            professional_email: Set(draft.professional_email),
            nationality: Set(draft.nationality),
            country: Set(draft.country),
            file: Set(draft.file),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_email_error)?;

        model_to_record(result)
    }

    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<CandidateRecord>, CandidateRepositoryError> {
        let candidate_id = parse_id(id)?;

        Entity::find_by_id(candidate_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<CandidateRecord>, CandidateRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn update(
        &self,
        id: &str,
        draft: CandidateDraft,
    ) -> Result<CandidateRecord, CandidateRepositoryError> {
        let candidate_id = parse_id(id)?;

        // The stored file URL survives updates; only create sets it.
        let model = ActiveModel {
            full_name: Set(draft.full_name),
            date_of_birth: Set(draft.date_of_birth),
            gender: Set(draft.gender.as_str().to_string()),
            full_address: Set(draft.full_address),
            phone_number: Set(draft.phone_number),
            professional_email: Set(draft.professional_email),
            nationality: Set(draft.nationality),
            country: Set(draft.country),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(candidate_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CandidateRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete(&self, id: &str) -> Result<(), CandidateRepositoryError> {
        let candidate_id = parse_id(id)?;

        let result = Entity::delete_by_id(candidate_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CandidateRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_id(id: &str) -> Result<Uuid, CandidateRepositoryError> {
    Uuid::parse_str(id).map_err(|_| CandidateRepositoryError::MalformedId)
}

fn model_to_record(
    model: candidates::Model,
) -> Result<CandidateRecord, CandidateRepositoryError> {
    let gender = Gender::parse(&model.gender).ok_or_else(|| {
        CandidateRepositoryError::Serialization(format!(
            "unknown gender value in store: {}",
            model.gender
        ))
    })?;

    Ok(CandidateRecord {
        id: model.id,
        full_name: model.full_name,
        date_of_birth: model.date_of_birth,
        gender,
        full_address: model.full_address,
        phone_number: model.phone_number,
        professional_email: model.professional_email,
        nationality: model.nationality,
        country: model.country,
        file: model.file,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_email_error(e: DbErr) -> CandidateRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        CandidateRepositoryError::DuplicateEmail
    } else {
        CandidateRepositoryError::Database(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CandidateRepositoryError {
    CandidateRepositoryError::Database(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn sample_draft() -> CandidateDraft {
        CandidateDraft {
            full_name: "Amina Benali".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 17).unwrap(),
            gender: Gender::Female,
            full_address: "8 avenue des Ternes, Paris".to_string(),
            phone_number: "+33 7 98 76 54 32".to_string(),
            professional_email: "amina.benali@example.com".to_string(),
            nationality: "French".to_string(),
            country: "France".to_string(),
            file: None,
        }
    }

    fn mock_model(id: Uuid) -> candidates::Model {
        let now = Utc::now().fixed_offset();
        candidates::Model {
            id,
            full_name: "Amina Benali".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 17).unwrap(),
            gender: "Female".to_string(),
            full_address: "8 avenue des Ternes, Paris".to_string(),
            phone_number: "+33 7 98 76 54 32".to_string(),
            professional_email: "amina.benali@example.com".to_string(),
            nationality: "French".to_string(),
            country: "France".to_string(),
            file: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_returns_persisted_record() {
        let candidate_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(candidate_id)]])
            .into_connection();

        let repo = CandidateRepositoryPostgres::new(Arc::new(db));
        let record = repo.insert(sample_draft()).await.unwrap();

        assert_eq!(record.id, candidate_id);
        assert_eq!(record.gender, Gender::Female);
    }

    #[tokio::test]
    async fn insert_translates_unique_email_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \
                 \"idx_candidates_professional_email_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = CandidateRepositoryPostgres::new(Arc::new(db));
        let err = repo.insert(sample_draft()).await.unwrap_err();

        assert_eq!(err, CandidateRepositoryError::DuplicateEmail);
    }

    #[tokio::test]
    async fn find_by_id_rejects_malformed_identifier() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = CandidateRepositoryPostgres::new(Arc::new(db));

        let err = repo.find_by_id("not-a-uuid").await.unwrap_err();

        assert_eq!(err, CandidateRepositoryError::MalformedId);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<candidates::Model>::new()])
            .into_connection();

        let repo = CandidateRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update(&Uuid::new_v4().to_string(), sample_draft())
            .await
            .unwrap_err();

        assert_eq!(err, CandidateRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CandidateRepositoryPostgres::new(Arc::new(db));
        let err = repo.delete(&Uuid::new_v4().to_string()).await.unwrap_err();

        assert_eq!(err, CandidateRepositoryError::NotFound);
    }

    #[test]
    fn unknown_stored_gender_is_a_serialization_error() {
        let mut model = mock_model(Uuid::new_v4());
        model.gender = "???".to_string();

        let err = model_to_record(model).unwrap_err();

        assert!(matches!(err, CandidateRepositoryError::Serialization(_)));
    }
}
