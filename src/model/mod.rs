//! Wire-level data transfer objects.
//!
//! These types define the JSON contract between the services and their clients, including the
//! contract the order service relies on when it calls the book and member services.

pub mod api;
pub mod book;
pub mod member;
pub mod order;
