use super::*;

/// Tests ranking emojis by usage within the window.
///
/// Verifies that counts are grouped per emoji, ordered most used first, and that
/// records from other guilds or older than the window are ignored.
///
/// Expected: Ok with two emojis in descending count order
#[tokio::test]
async fn counts_emojis_in_window_most_used_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = Utc::now() - Duration::hours(1);
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "101", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "10", "102", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "20", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", Utc::now() - Duration::hours(800))
        .await?;

    let repo = EmojiLogRepository::new(db);
    let param = EmojiUsageParam {
        guild_id: 10,
        hours: 720,
        user_id: None,
    };
    let usage = repo
        .usage_by_emoji(&param, Utc::now() - Duration::hours(720))
        .await?;

    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].emoji, "<:cheer:2>");
    assert_eq!(usage[0].count, 3);
    assert_eq!(usage[1].emoji, "<:wave:1>");
    assert_eq!(usage[1].count, 1);

    Ok(())
}

/// Tests restricting the emoji ranking to a single member.
///
/// Expected: Ok with only the member's own usage counted
#[tokio::test]
async fn restricts_to_member_when_user_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = Utc::now() - Duration::minutes(5);
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "101", "<:cheer:2>", recent).await?;

    let repo = EmojiLogRepository::new(db);
    let param = EmojiUsageParam {
        guild_id: 10,
        hours: 24,
        user_id: Some(100),
    };
    let usage = repo
        .usage_by_emoji(&param, Utc::now() - Duration::hours(24))
        .await?;

    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].emoji, "<:wave:1>");
    assert_eq!(usage[0].count, 2);

    Ok(())
}

/// Tests that a guild without records yields an empty ranking.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_quiet_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmojiLogRepository::new(db);
    let param = EmojiUsageParam {
        guild_id: 99,
        hours: 720,
        user_id: None,
    };
    let usage = repo
        .usage_by_emoji(&param, Utc::now() - Duration::hours(720))
        .await?;

    assert!(usage.is_empty());

    Ok(())
}
