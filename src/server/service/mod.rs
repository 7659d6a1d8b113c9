//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. The book, member and order
//! services are thin CRUD orchestration; `enrichment` is the one place where a request fans out
//! to other services, through the HTTP client in `upstream`.

pub mod book;
pub mod enrichment;
pub mod member;
pub mod order;
pub mod upstream;

#[cfg(test)]
mod test;
