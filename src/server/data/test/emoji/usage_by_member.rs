use super::*;

/// Tests ranking members by usage of one emoji.
///
/// Expected: Ok with members ordered by how often they used that emoji
#[tokio::test]
async fn ranks_members_for_single_emoji() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = Utc::now() - Duration::hours(2);
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "101", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "101", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:cheer:2>", recent).await?;

    let repo = EmojiLogRepository::new(db);
    let param = EmojiMemberParam {
        guild_id: 10,
        emoji: Some("<:wave:1>".to_string()),
        hours: 720,
    };
    let members = repo
        .usage_by_member(&param, Utc::now() - Duration::hours(720))
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_id, "101");
    assert_eq!(members[0].usage_count, 2);
    assert_eq!(members[1].user_id, "100");
    assert_eq!(members[1].usage_count, 1);

    Ok(())
}

/// Tests ranking members across all emojis when none is given.
///
/// Expected: Ok with every emoji use counted towards its member
#[tokio::test]
async fn counts_all_emojis_when_none_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recent = Utc::now() - Duration::hours(2);
    factory::create_emoji_log(db, "10", "100", "<:wave:1>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "10", "100", "<:cheer:2>", recent).await?;
    factory::create_emoji_log(db, "10", "101", "<:wave:1>", recent).await?;

    let repo = EmojiLogRepository::new(db);
    let param = EmojiMemberParam {
        guild_id: 10,
        emoji: None,
        hours: 720,
    };
    let members = repo
        .usage_by_member(&param, Utc::now() - Duration::hours(720))
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_id, "100");
    assert_eq!(members[0].usage_count, 3);

    Ok(())
}
