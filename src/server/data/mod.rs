//! Database repository layer for the record stores.
//!
//! Each repository owns the CRUD operations of exactly one table. Repositories use SeaORM
//! entity models internally and return domain models, keeping the rest of the backend
//! independent of the schema. No repository reads another store's table.

pub mod book;
pub mod member;
pub mod order;

#[cfg(test)]
mod test;
