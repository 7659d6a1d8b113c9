//! SeaORM entities for the library record stores.
//!
//! Each entity belongs to exactly one service: `book` to the books service, `member` to the
//! members service and `order` to the orders service. No entity declares a relation to another
//! since references between stores are resolved over HTTP, never through a join.

pub mod prelude;

pub mod book;
pub mod member;
pub mod order;
