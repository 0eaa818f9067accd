use crate::server::{
    data::message::MessageLogRepository,
    model::stats::{CreateMessageLogParam, DailyMessageParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
