use super::*;

/// Tests detecting amenity IDs that do not exist.
///
/// Expected: only the unknown ID is returned
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let wifi = factory::create_amenity(db).await?;

    let missing = AmenityRepository::new(db)
        .find_missing(&[wifi.id.clone(), "ghost".to_string()])
        .await?;

    assert_eq!(missing, ["ghost"]);
    assert!(AmenityRepository::new(db).find_missing(&[]).await?.is_empty());

    Ok(())
}
