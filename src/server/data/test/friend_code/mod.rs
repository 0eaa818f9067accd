use crate::server::{
    data::friend_code::FriendCodeRepository, model::friend_code::FriendCodeFilter,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;
mod unique_key;
