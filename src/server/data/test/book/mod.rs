use crate::server::{data::book::BookRepository, model::book::CreateBookParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
mod get_by_id;

fn dune() -> CreateBookParams {
    CreateBookParams {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "9780441013593".to_string(),
        publisher: "Ace".to_string(),
    }
}
