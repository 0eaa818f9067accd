use super::*;

/// Tests creating a game title.
///
/// Expected: Ok with the stored title and a generated ID
#[tokio::test]
async fn creates_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameTitleRepository::new(db);
    let created = repo.create("Switch".to_string()).await?;

    assert_eq!(created.title, "Switch");
    assert!(created.game_id > 0);

    Ok(())
}

/// Tests that title names are unique.
///
/// Expected: Err on the second insert of the same name
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_friend_code_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameTitleRepository::new(db);
    repo.create("Switch".to_string()).await?;
    let result = repo.create("Switch".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
