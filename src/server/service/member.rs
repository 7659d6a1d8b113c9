use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::member::MemberRepository,
    error::AppError,
    model::member::{CreateMemberParams, Member},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new member
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo.create(params).await?;

        tracing::debug!("Created member {}", member.id);

        Ok(member)
    }

    /// Gets every member
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific member by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a member
    /// Returns true if deleted, false if not found. Orders that reference the member are kept.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = MemberRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::debug!("Deleted member {}", id);
        }

        Ok(deleted)
    }
}
