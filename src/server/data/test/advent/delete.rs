use super::*;

/// Tests deleting an entry by (user, date).
///
/// Expected: Ok(1) with other entries unchanged
#[tokio::test]
async fn deletes_matching_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Advent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_advent(db, "5", date(2024, 12, 1)).await?;
    let kept = factory::create_advent(db, "5", date(2024, 12, 2)).await?;

    let repo = AdventRepository::new(db);
    let deleted = repo.delete(5, date(2024, 12, 1)).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::Advent::find().all(db).await?, vec![kept]);

    Ok(())
}

/// Tests deleting a key that has no entry.
///
/// Expected: Ok(0) and nothing removed
#[tokio::test]
async fn missing_entry_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Advent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_advent(db, "5", date(2024, 12, 1)).await?;

    let repo = AdventRepository::new(db);
    let deleted = repo.delete(5, date(2024, 12, 25)).await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::Advent::find().count(db).await?, 1);

    Ok(())
}
