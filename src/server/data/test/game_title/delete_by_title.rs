use super::*;

/// Tests deleting a title that still has friend codes.
///
/// Verifies that the title is removed while its friend codes stay stored.
///
/// Expected: Ok(1) with dependent friend codes untouched
#[tokio::test]
async fn deletes_title_and_leaves_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_friend_code_with_title(db, "100").await?;

    let repo = GameTitleRepository::new(db);
    let deleted = repo.delete_by_title(&title.title).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::FriendCodeGame::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FriendCode::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a title that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_title_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game_title(db).await?;

    let repo = GameTitleRepository::new(db);
    let deleted = repo.delete_by_title("Nope").await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::FriendCodeGame::find().count(db).await?, 1);

    Ok(())
}
