use crate::server::{
    data::emoji::EmojiLogRepository,
    model::stats::{EmojiMemberParam, EmojiUsageParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod usage_by_emoji;
mod usage_by_member;
