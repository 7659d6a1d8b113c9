//! Member domain model and creation parameters.

use uuid::Uuid;

use crate::{
    model::member::{CreateMemberDto, MemberDto},
    server::{
        error::AppError,
        util::parse::{optional_text, required_text},
    },
};

/// A library member as held by the member store.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Member {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Validated input for creating a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl CreateMemberParams {
    /// Validates a creation payload.
    ///
    /// Name and email are required; the email must contain an `@`. A blank phone is stored
    /// as absent.
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, AppError> {
        let name = required_text("name", dto.name)?;
        let email = required_text("email", dto.email)?;

        if !email.contains('@') {
            return Err(AppError::Validation(format!(
                "Field 'email' is not a valid email address: '{}'",
                email
            )));
        }

        Ok(Self {
            name,
            email,
            phone: optional_text(dto.phone),
        })
    }
}
