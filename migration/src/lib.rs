//! Schema migrations for the library services.
//!
//! Every service owns exactly one table, so each gets its own migrator with its own tracking
//! table. A service only ever runs its own migrator, which keeps the stores independent even
//! when two services are pointed at the same database file.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_book_table;
mod m20250301_000002_create_member_table;
mod m20250301_000003_create_order_table;

pub struct BookMigrator;

#[async_trait::async_trait]
impl MigratorTrait for BookMigrator {
    fn migration_table_name() -> DynIden {
        Alias::new("book_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_book_table::Migration)]
    }
}

pub struct MemberMigrator;

#[async_trait::async_trait]
impl MigratorTrait for MemberMigrator {
    fn migration_table_name() -> DynIden {
        Alias::new("member_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000002_create_member_table::Migration)]
    }
}

pub struct OrderMigrator;

#[async_trait::async_trait]
impl MigratorTrait for OrderMigrator {
    fn migration_table_name() -> DynIden {
        Alias::new("order_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000003_create_order_table::Migration)]
    }
}
