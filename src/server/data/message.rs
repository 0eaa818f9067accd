//! Message log ingestion and per-day activity counts.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult,
};

use crate::server::{
    data::{dialect, query::QueryBuilder},
    model::stats::{CreateMessageLogParam, DailyMessageCount, DailyMessageParam},
};

#[derive(FromQueryResult)]
struct DayCountRow {
    day: String,
    message_count: i64,
}

pub struct MessageLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message record stamped with the current time.
    pub async fn create(
        &self,
        param: CreateMessageLogParam,
    ) -> Result<entity::message_log::Model, DbErr> {
        entity::message_log::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            sent_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Counts a member's messages per calendar day since `since`.
    ///
    /// Days without messages are absent from the result. Days are returned oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<DailyMessageCount>)` - One entry per active day
    /// - `Err(DbErr)` - Database error during query
    pub async fn daily_counts(
        &self,
        param: &DailyMessageParam,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyMessageCount>, DbErr> {
        let backend = self.db.get_database_backend();
        let day = dialect::day_bucket(backend, "sent_at");

        let statement = QueryBuilder::new(
            backend,
            format!("SELECT {} AS day, COUNT(id) AS message_count FROM message_log", day),
        )
        .filter_eq("guild_id", Some(param.guild_id.to_string()))
        .filter_eq("user_id", Some(param.user_id.to_string()))
        .filter(Some(since), |p| format!("sent_at >= {}", p))
        .group_by(&day)
        .order_by(&day)
        .build();

        let rows = self.db.query_all_raw(statement).await?;

        rows.iter()
            .map(|row| {
                DayCountRow::from_query_result(row, "").map(|r| DailyMessageCount {
                    date: r.day,
                    count: r.message_count,
                })
            })
            .collect()
    }
}
