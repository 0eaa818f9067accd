use super::*;

/// Tests appending a message log record.
///
/// Verifies that IDs are stored as strings and the record is stamped with the
/// current time.
///
/// Expected: Ok with one stored record
#[tokio::test]
async fn appends_message_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now() - Duration::seconds(1);
    let repo = MessageLogRepository::new(db);
    let record = repo
        .create(CreateMessageLogParam {
            guild_id: 10,
            channel_id: 20,
            user_id: 30,
        })
        .await?;

    assert_eq!(record.guild_id, "10");
    assert_eq!(record.channel_id, "20");
    assert_eq!(record.user_id, "30");
    assert!(record.sent_at >= before);

    let count = entity::prelude::MessageLog::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
