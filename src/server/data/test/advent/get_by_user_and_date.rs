use super::*;

#[tokio::test]
async fn finds_entry_for_user_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Advent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_advent(db, "5", date(2024, 12, 1)).await?;
    factory::create_advent(db, "5", date(2024, 12, 2)).await?;
    factory::create_advent(db, "6", date(2024, 12, 1)).await?;

    let repo = AdventRepository::new(db);
    let entries = repo.get_by_user_and_date(5, date(2024, 12, 1)).await?;

    assert_eq!(entries, vec![target]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_when_nothing_posted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Advent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdventRepository::new(db);
    let entries = repo.get_by_user_and_date(5, date(2024, 12, 1)).await?;

    assert!(entries.is_empty());

    Ok(())
}
