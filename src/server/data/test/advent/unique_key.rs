use super::*;

/// Tests that the migrated schema rejects a second entry for the same (user, date).
///
/// Expected: Err(DbErr) from the unique index
#[tokio::test]
async fn duplicate_user_and_date_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_advent(db, "5", date(2024, 12, 1)).await?;

    let duplicate = factory::create_advent(db, "5", date(2024, 12, 1)).await;
    assert!(duplicate.is_err());

    factory::create_advent(db, "5", date(2024, 12, 2)).await?;
    factory::create_advent(db, "6", date(2024, 12, 1)).await?;
    assert_eq!(entity::prelude::Advent::find().count(db).await?, 3);

    Ok(())
}

/// Tests that the repository upsert replaces in place under the unique index.
///
/// Expected: Ok with one row holding the second title
#[tokio::test]
async fn upsert_respects_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdventRepository::new(db);
    for title in ["Day one", "Day one, revised"] {
        repo.upsert(UpsertAdventParam {
            user_id: 5,
            author: "Taro".to_string(),
            title: title.to_string(),
            url: String::new(),
            date: date(2024, 12, 1),
        })
        .await?;
    }

    let entries = entity::prelude::Advent::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Day one, revised");

    Ok(())
}
