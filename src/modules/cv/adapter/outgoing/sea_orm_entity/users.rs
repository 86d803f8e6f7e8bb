use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subject directory row, written by the identity gateway. This service
/// only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub display_name: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cvs::Entity")]
    Cvs,
}

impl Related<super::cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
