use super::*;

/// Tests fetching matching songs by position.
///
/// Expected: Ok(Some) within range in song ID order, Ok(None) past the end
#[tokio::test]
async fn fetches_song_at_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, _) = factory::helpers::create_song_with_charts(db, &["13"]).await?;
    factory::helpers::create_song_with_charts(db, &["12"]).await?;
    let (_, third, _) = factory::helpers::create_song_with_charts(db, &["13"]).await?;

    let repo = SongRepository::new(db);
    let params = SongSearchParams {
        level: Some("13".to_string()),
        ..Default::default()
    };

    let at_zero = repo.nth(&params, 0).await?;
    let at_one = repo.nth(&params, 1).await?;
    let at_two = repo.nth(&params, 2).await?;

    assert_eq!(at_zero.map(|row| row.song_id), Some(first.song_id));
    assert_eq!(at_one.map(|row| row.song_id), Some(third.song_id));
    assert!(at_two.is_none());

    Ok(())
}

/// Tests counting and fetching by position within one transaction.
///
/// Expected: Ok with the count and every in-range position resolving to a song
#[tokio::test]
async fn count_and_position_share_a_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _, _) = factory::helpers::create_song_with_charts(db, &["14"]).await?;
    factory::create_song(db, game.game_id).await?;

    let params = SongSearchParams {
        game_id: Some(Some(game.game_id)),
        ..Default::default()
    };

    let txn = db.begin().await?;
    let repo = SongRepository::new(&txn);

    let count = repo.count(&params).await?;
    assert_eq!(count, 2);
    for index in 0..count {
        assert!(repo.nth(&params, index).await?.is_some());
    }
    assert!(repo.nth(&params, count).await?.is_none());

    txn.commit().await?;

    Ok(())
}
