use super::*;

/// Tests that the migrated schema rejects a second row for the same (user, game).
///
/// Expected: Err(DbErr) from the unique index, leaving a single row
#[tokio::test]
async fn duplicate_user_and_game_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let title = factory::create_game_title(db).await?;
    factory::create_friend_code(db, "100", title.game_id).await?;

    let duplicate = factory::create_friend_code(db, "100", title.game_id).await;
    assert!(duplicate.is_err());

    let rows = entity::prelude::FriendCode::find()
        .filter(entity::friend_code::Column::UserId.eq("100"))
        .count(db)
        .await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that the same user may hold codes for different games and different users
/// may hold codes for the same game.
///
/// Expected: Ok for every insert
#[tokio::test]
async fn distinct_keys_are_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game_title(db).await?;
    let second = factory::create_game_title(db).await?;
    factory::create_friend_code(db, "100", first.game_id).await?;
    factory::create_friend_code(db, "100", second.game_id).await?;
    factory::create_friend_code(db, "200", first.game_id).await?;

    assert_eq!(entity::prelude::FriendCode::find().count(db).await?, 3);

    Ok(())
}

/// Tests that the repository upsert replaces in place under the unique index.
///
/// Expected: Ok with one row holding the latest code
#[tokio::test]
async fn upsert_respects_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let title = factory::create_game_title(db).await?;

    let repo = FriendCodeRepository::new(db);
    repo.upsert(100, title.game_id, "SW-1111".to_string()).await?;
    let stored = repo.upsert(100, title.game_id, "SW-2222".to_string()).await?;

    assert_eq!(stored.friend_code, "SW-2222");
    assert_eq!(entity::prelude::FriendCode::find().count(db).await?, 1);

    Ok(())
}
