use async_trait::async_trait;
use chrono::Utc;

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::cvs::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::cv::application::ports::outgoing::{
    CvDraft, CvListFilter, CvRepository, CvRepositoryError, PageRequest,
};
use crate::modules::cv::domain::entities::{CvRecord, PersonalInfo};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CvRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvRepository for CvRepositoryPostgres {
    async fn insert(&self, owner: Uuid, draft: CvDraft) -> Result<CvRecord, CvRepositoryError> {
        let now = Utc::now().fixed_offset();
        let p = draft.personal_info;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner),
            first_name: Set(p.first_name),
            last_name: Set(p.last_name),
            email: Set(p.email),
            phone: Set(p.phone),
            address: Set(p.address),
            city: Set(p.city),
            zip_code: Set(p.zip_code),
            country: Set(p.country),
            professional_title: Set(p.professional_title),
            profile_summary: Set(p.profile_summary),
            photo: Set(p.photo),
            experiences: Set(to_json(&draft.experiences)?),
            education: Set(to_json(&draft.education)?),
            skills: Set(to_json(&draft.skills)?),
            languages: Set(to_json(&draft.languages)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_email_error)?;

        model_to_record(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CvRecord>, CvRepositoryError> {
        let cv_id = parse_id(id)?;

        Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<CvRecord>, CvRepositoryError> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<CvRecord>, CvRepositoryError> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn list(
        &self,
        filter: &CvListFilter,
        page: &PageRequest,
    ) -> Result<(Vec<CvRecord>, u64), CvRepositoryError> {
        let condition = search_condition(&filter.search);

        let data_query = Entity::find()
            .filter(condition.clone())
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db);

        let count_query = Entity::find().filter(condition).count(&*self.db);

        let (models, total) = futures::try_join!(data_query, count_query).map_err(map_db_err)?;

        let records = models
            .into_iter()
            .map(model_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total))
    }

    async fn update(&self, id: &str, draft: CvDraft) -> Result<CvRecord, CvRepositoryError> {
        let cv_id = parse_id(id)?;

        let results = Entity::update_many()
            .set(replacement_model(draft)?)
            .filter(Column::Id.eq(cv_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CvRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn update_owned(
        &self,
        id: &str,
        owner: Uuid,
        draft: CvDraft,
    ) -> Result<CvRecord, CvRepositoryError> {
        let cv_id = parse_id(id)?;

        // id and owner evaluated together in one statement, so an
        // ownership mismatch and a missing row are indistinguishable.
        let results = Entity::update_many()
            .set(replacement_model(draft)?)
            .filter(Column::Id.eq(cv_id))
            .filter(Column::OwnerId.eq(owner))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CvRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete(&self, id: &str) -> Result<(), CvRepositoryError> {
        let cv_id = parse_id(id)?;

        let result = Entity::delete_by_id(cv_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CvRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_id(id: &str) -> Result<Uuid, CvRepositoryError> {
    Uuid::parse_str(id).map_err(|_| CvRepositoryError::MalformedId)
}

fn search_condition(search: &str) -> Condition {
    let search = search.trim();
    if search.is_empty() {
        return Condition::all();
    }

    let pattern = format!("%{}%", escape_like(search));

    Condition::any()
        .add(Expr::col(Column::Email).ilike(pattern.clone()))
        .add(Expr::col(Column::FirstName).ilike(pattern.clone()))
        .add(Expr::col(Column::LastName).ilike(pattern.clone()))
        .add(Expr::col(Column::ProfessionalTitle).ilike(pattern))
}

/// LIKE metacharacters in user input must match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn replacement_model(draft: CvDraft) -> Result<ActiveModel, CvRepositoryError> {
    let p = draft.personal_info;

    Ok(ActiveModel {
        first_name: Set(p.first_name),
        last_name: Set(p.last_name),
        email: Set(p.email),
        phone: Set(p.phone),
        address: Set(p.address),
        city: Set(p.city),
        zip_code: Set(p.zip_code),
        country: Set(p.country),
        professional_title: Set(p.professional_title),
        profile_summary: Set(p.profile_summary),
        photo: Set(p.photo),
        experiences: Set(to_json(&draft.experiences)?),
        education: Set(to_json(&draft.education)?),
        skills: Set(to_json(&draft.skills)?),
        languages: Set(to_json(&draft.languages)?),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_record(model: cvs::Model) -> Result<CvRecord, CvRepositoryError> {
    Ok(CvRecord {
        id: model.id,
        owner: model.owner_id,
        personal_info: PersonalInfo {
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            zip_code: model.zip_code,
            country: model.country,
            professional_title: model.professional_title,
            profile_summary: model.profile_summary,
            photo: model.photo,
        },
        experiences: from_json(&model.experiences)?,
        education: from_json(&model.education)?,
        skills: from_json(&model.skills)?,
        languages: from_json(&model.languages)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, CvRepositoryError> {
    serde_json::to_value(data).map_err(|e| CvRepositoryError::Serialization(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, CvRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| CvRepositoryError::Serialization(e.to_string()))
}

fn map_email_error(e: DbErr) -> CvRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        CvRepositoryError::DuplicateEmail
    } else {
        CvRepositoryError::Database(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CvRepositoryError {
    CvRepositoryError::Database(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
