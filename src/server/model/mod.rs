//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and into wire
//! DTOs at the controller boundary. Parameter types carry already-validated input for create
//! operations, so the data layer never sees raw client input.

pub mod book;
pub mod member;
pub mod order;
