use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub full_name: String,

    pub date_of_birth: Date,

    // Stored as its display string; Gender::parse reads it back.
    #[sea_orm(column_type = "Text")]
    pub gender: String,

    #[sea_orm(column_type = "Text")]
    pub full_address: String,

    #[sea_orm(column_type = "Text")]
    pub phone_number: String,

    // Lowercased before save; the unique index guards duplicates.
    #[sea_orm(column_type = "Text")]
    pub professional_email: String,

    #[sea_orm(column_type = "Text")]
    pub nationality: String,

    #[sea_orm(column_type = "Text")]
    pub country: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub file: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.professional_email {
            self.professional_email = Set(email.trim().to_lowercase());
        }

        Ok(self)
    }
}
