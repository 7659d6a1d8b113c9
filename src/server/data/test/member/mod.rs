use crate::server::{data::member::MemberRepository, model::member::CreateMemberParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
