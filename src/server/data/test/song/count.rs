use super::*;

#[tokio::test]
async fn counts_songs_matching_game_and_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _, _) = factory::helpers::create_song_with_charts(db, &["13", "14"]).await?;
    let other = factory::create_song(db, game.game_id).await?;
    factory::catalog::ChartFactory::new(db, other.song_id)
        .level("13")
        .build()
        .await?;
    factory::helpers::create_song_with_charts(db, &["13"]).await?;

    let repo = SongRepository::new(db);

    let all = repo.count(&SongSearchParams::default()).await?;
    let in_game = repo
        .count(&SongSearchParams {
            game_id: Some(Some(game.game_id)),
            level: Some("13".to_string()),
            ..Default::default()
        })
        .await?;
    let level_only = repo
        .count(&SongSearchParams {
            level: Some("14".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(all, 3);
    assert_eq!(in_game, 2);
    assert_eq!(level_only, 1);

    Ok(())
}
