use sea_orm::entity::prelude::*;

/// A loan of one book to one member.
///
/// `member_ref` and `book_ref` point into other services' stores and are deliberately not
/// foreign keys.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loan_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub member_ref: Uuid,
    pub book_ref: Uuid,
    pub initial_date: Date,
    pub delivery_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
