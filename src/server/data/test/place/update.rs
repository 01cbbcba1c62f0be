use super::*;

/// Tests updating price and title of a place.
///
/// Expected: Ok(Some(Place)) with changed fields and unchanged coordinates
#[tokio::test]
async fn updates_price_and_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;

    let updated = PlaceRepository::new(db)
        .update(
            &place.id,
            UpdatePlaceParam {
                title: Some("Renovated".to_string()),
                price: Some(150.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renovated");
    assert_eq!(updated.price, 150.0);
    assert_eq!(updated.latitude, place.latitude);
    assert!(updated.updated_at >= place.updated_at);

    Ok(())
}
