use super::*;

/// Tests resolving several game IDs in one call.
///
/// Expected: Ok with a name for every existing ID and none for missing IDs
#[tokio::test]
async fn resolves_existing_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::catalog::GameFactory::new(db)
        .name("maimai")
        .build()
        .await?;
    let second = factory::catalog::GameFactory::new(db)
        .name("ONGEKI")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let names = repo
        .names_by_ids(vec![first.game_id, second.game_id, 9999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&first.game_id).map(String::as_str), Some("maimai"));
    assert_eq!(names.get(&second.game_id).map(String::as_str), Some("ONGEKI"));
    assert!(!names.contains_key(&9999));

    Ok(())
}

#[tokio::test]
async fn empty_input_skips_query() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.names_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
