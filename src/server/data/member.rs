//! Member data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::member::{CreateMemberParams, Member};

/// Repository providing database operations for the member table.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member with a freshly assigned identifier.
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find().all(self.db).await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Deletes a member by ID, returning whether a row was removed.
    ///
    /// Orders referencing the member are left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
