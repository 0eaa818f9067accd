use super::*;

/// Tests an unfiltered search over the whole catalog.
///
/// Verifies that every song is returned in song ID order with all of its charts
/// aggregated into the chart column.
///
/// Expected: Ok with all songs and their charts
#[tokio::test]
async fn returns_all_songs_with_charts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, charts) = factory::helpers::create_song_with_charts(db, &["12", "13+"]).await?;
    let (_, second, _) = factory::helpers::create_song_with_charts(db, &["14"]).await?;

    let repo = SongRepository::new(db);
    let rows = repo.search(&SongSearchParams::default()).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].song_id, first.song_id);
    assert_eq!(rows[1].song_id, second.song_id);

    let decoded = decode_charts(&rows[0].charts).unwrap();
    let ids: Vec<i32> = decoded.iter().map(|c| c.chart_id).collect();
    assert_eq!(ids, charts.iter().map(|c| c.chart_id).collect::<Vec<_>>());
    assert_eq!(decoded[1].level.as_deref(), Some("13+"));
    assert_eq!(decoded[1].chart_const, Some(13.0));

    Ok(())
}

/// Tests that a song without charts aggregates to an empty chart list.
///
/// Expected: Ok with the song present and no decoded charts
#[tokio::test]
async fn chartless_song_has_no_charts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, song, _) = factory::helpers::create_song_with_charts(db, &[]).await?;

    let repo = SongRepository::new(db);
    let rows = repo.search(&SongSearchParams::default()).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].song_id, song.song_id);
    assert!(decode_charts(&rows[0].charts).unwrap().is_empty());

    Ok(())
}

/// Tests free-text and equality filters together.
///
/// Expected: Ok with only songs matching title substring, artist substring and category
#[tokio::test]
async fn combines_text_and_category_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let target = factory::catalog::SongFactory::new(db, game.game_id)
        .title("Love Letter")
        .artist("Composer A")
        .category("POPS")
        .build()
        .await?;
    factory::catalog::SongFactory::new(db, game.game_id)
        .title("Lovely Day")
        .artist("Composer B")
        .category("POPS")
        .build()
        .await?;
    factory::catalog::SongFactory::new(db, game.game_id)
        .title("Love Song")
        .artist("Composer A")
        .category("ORIGINAL")
        .build()
        .await?;

    let repo = SongRepository::new(db);
    let rows = repo
        .search(&SongSearchParams {
            title: Some("Love".to_string()),
            artist: Some("A".to_string()),
            category: Some("POPS".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].song_id, target.song_id);

    Ok(())
}

/// Tests that an unresolved game name filters everything out.
///
/// Expected: Ok(empty) even though the title filter alone would match
#[tokio::test]
async fn unresolved_game_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::catalog::SongFactory::new(db, game.game_id)
        .title("Love Letter")
        .build()
        .await?;

    let repo = SongRepository::new(db);
    let rows = repo
        .search(&SongSearchParams {
            title: Some("Love".to_string()),
            game_id: Some(None),
            ..Default::default()
        })
        .await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that the level filter keeps every chart of a matching song.
///
/// Expected: Ok with the matching song carrying charts of all levels
#[tokio::test]
async fn level_filter_keeps_all_charts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, target, _) = factory::helpers::create_song_with_charts(db, &["12", "14"]).await?;
    factory::helpers::create_song_with_charts(db, &["12", "13"]).await?;

    let repo = SongRepository::new(db);
    let rows = repo
        .search(&SongSearchParams {
            level: Some("14".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].song_id, target.song_id);
    assert_eq!(decode_charts(&rows[0].charts).unwrap().len(), 2);

    Ok(())
}

/// Tests the chart constant range with one and both bounds.
///
/// Expected: Ok with songs having a chart whose constant lies within the bounds
#[tokio::test]
async fn filters_by_const_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let low = factory::create_song(db, game.game_id).await?;
    let high = factory::create_song(db, game.game_id).await?;
    factory::catalog::ChartFactory::new(db, low.song_id)
        .chart_const(12.5)
        .build()
        .await?;
    factory::catalog::ChartFactory::new(db, high.song_id)
        .chart_const(14.8)
        .build()
        .await?;

    let repo = SongRepository::new(db);

    let above = repo
        .search(&SongSearchParams {
            const_min: Some(14.0),
            ..Default::default()
        })
        .await?;
    assert_eq!(above.len(), 1);
    assert_eq!(above[0].song_id, high.song_id);

    let within = repo
        .search(&SongSearchParams {
            const_min: Some(12.0),
            const_max: Some(13.0),
            ..Default::default()
        })
        .await?;
    assert_eq!(within.len(), 1);
    assert_eq!(within[0].song_id, low.song_id);

    Ok(())
}
