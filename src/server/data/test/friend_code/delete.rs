use super::*;

/// Tests deleting a member's friend code for a game.
///
/// Expected: Ok(1) and other entries unchanged
#[tokio::test]
async fn deletes_only_matching_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let title = factory::create_game_title(db).await?;
    factory::create_friend_code(db, "100", title.game_id).await?;
    let other = factory::create_friend_code(db, "200", title.game_id).await?;

    let repo = FriendCodeRepository::new(db);
    let deleted = repo.delete(100, title.game_id).await?;

    assert_eq!(deleted, 1);
    let remaining = entity::prelude::FriendCode::find().all(db).await?;
    assert_eq!(remaining, vec![other]);

    Ok(())
}

/// Tests deleting an entry that does not exist.
///
/// Expected: Ok(0) and no rows removed
#[tokio::test]
async fn missing_entry_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_friend_code_with_title(db, "100").await?;

    let repo = FriendCodeRepository::new(db);
    let deleted = repo.delete(999, title.game_id).await?;

    assert_eq!(deleted, 0);
    let count = entity::prelude::FriendCode::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
