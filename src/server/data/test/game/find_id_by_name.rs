use super::*;

#[tokio::test]
async fn resolves_known_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::catalog::GameFactory::new(db)
        .name("CHUNITHM")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert_eq!(repo.find_id_by_name("CHUNITHM").await?, Some(game.game_id));
    assert_eq!(repo.find_id_by_name("Unknown").await?, None);

    Ok(())
}
