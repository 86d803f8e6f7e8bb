use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::cv::adapter::outgoing::sea_orm_entity::users;
use crate::modules::cv::application::ports::outgoing::{
    OwnerDirectory, OwnerDirectoryError, OwnerIdentity,
};

/// Read-only lookup against the subject directory table.
#[derive(Clone)]
pub struct OwnerDirectoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OwnerDirectoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerDirectory for OwnerDirectoryPostgres {
    async fn find(&self, owner: Uuid) -> Result<Option<OwnerIdentity>, OwnerDirectoryError> {
        let user = users::Entity::find_by_id(owner)
            .one(&*self.db)
            .await
            .map_err(|e| OwnerDirectoryError::Database(e.to_string()))?;

        Ok(user.map(|u| OwnerIdentity {
            display_name: u.display_name,
            email: u.email,
        }))
    }
}
