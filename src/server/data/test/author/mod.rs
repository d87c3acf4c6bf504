use crate::server::{
    data::{author::AuthorRepository, context::LibraryContext},
    model::author::{CreateAuthorParams, UpdateAuthorParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
