use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // member_ref and book_ref live in other services, no foreign keys
        manager
            .create_table(
                Table::create()
                    .table(LoanOrder::Table)
                    .if_not_exists()
                    .col(pk_uuid(LoanOrder::Id))
                    .col(uuid(LoanOrder::MemberRef))
                    .col(uuid(LoanOrder::BookRef))
                    .col(date(LoanOrder::InitialDate))
                    .col(date(LoanOrder::DeliveryDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoanOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum LoanOrder {
    Table,
    Id,
    MemberRef,
    BookRef,
    InitialDate,
    DeliveryDate,
}
