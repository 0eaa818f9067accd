use super::*;

/// Tests listing every friend code with its game title.
///
/// Expected: Ok with all entries in registration order
#[tokio::test]
async fn lists_all_entries_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let switch = factory::friend_code::create_game_title_named(db, "Switch").await?;
    let arcade = factory::friend_code::create_game_title_named(db, "Arcade").await?;
    factory::create_friend_code(db, "100", switch.game_id).await?;
    factory::create_friend_code(db, "200", arcade.game_id).await?;

    let repo = FriendCodeRepository::new(db);
    let rows = repo.list(&FriendCodeFilter::default()).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].user_id, "100");
    assert_eq!(rows[0].game, "Switch");
    assert_eq!(rows[1].user_id, "200");
    assert_eq!(rows[1].game, "Arcade");

    Ok(())
}

/// Tests each combination of the user and game filters.
///
/// Expected: Ok with only entries matching every present filter
#[tokio::test]
async fn applies_user_and_game_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let switch = factory::friend_code::create_game_title_named(db, "Switch").await?;
    let arcade = factory::friend_code::create_game_title_named(db, "Arcade").await?;
    factory::create_friend_code(db, "100", switch.game_id).await?;
    factory::create_friend_code(db, "100", arcade.game_id).await?;
    factory::create_friend_code(db, "200", switch.game_id).await?;

    let repo = FriendCodeRepository::new(db);

    let by_user = repo
        .list(&FriendCodeFilter {
            user_id: Some(100),
            game: None,
        })
        .await?;
    assert_eq!(by_user.len(), 2);
    assert!(by_user.iter().all(|row| row.user_id == "100"));

    let by_game = repo
        .list(&FriendCodeFilter {
            user_id: None,
            game: Some("Switch".to_string()),
        })
        .await?;
    assert_eq!(by_game.len(), 2);
    assert!(by_game.iter().all(|row| row.game == "Switch"));

    let by_both = repo
        .list(&FriendCodeFilter {
            user_id: Some(200),
            game: Some("Switch".to_string()),
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].user_id, "200");

    let none = repo
        .list(&FriendCodeFilter {
            user_id: Some(200),
            game: Some("Arcade".to_string()),
        })
        .await?;
    assert!(none.is_empty());

    Ok(())
}

/// Tests that entries whose game title was deleted are hidden.
///
/// Expected: Ok with the orphaned entry absent from the listing
#[tokio::test]
async fn hides_entries_of_deleted_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_friend_code_with_title(db, "100").await?;
    entity::prelude::FriendCodeGame::delete_by_id(title.game_id)
        .exec(db)
        .await?;

    let repo = FriendCodeRepository::new(db);
    let rows = repo.list(&FriendCodeFilter::default()).await?;

    assert!(rows.is_empty());
    let stored = entity::prelude::FriendCode::find().count(db).await?;
    assert_eq!(stored, 1);

    Ok(())
}
