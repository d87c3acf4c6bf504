use crate::server::{
    data::{book::BookRepository, context::LibraryContext},
    model::book::{CreateBookParams, UpdateBookParams},
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
