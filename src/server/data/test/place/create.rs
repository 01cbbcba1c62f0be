use super::*;

/// Tests creating a place linked to amenities.
///
/// Expected: Ok(Place) with both amenities, sorted by name
#[tokio::test]
async fn creates_place_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let wifi = factory::amenity::create_amenity_named(db, "Wifi").await?;
    let pool = factory::amenity::create_amenity_named(db, "Pool").await?;

    let place = PlaceRepository::new(db)
        .create(CreatePlaceParam {
            title: "Loft".to_string(),
            description: "Bright loft".to_string(),
            price: 120.0,
            latitude: 40.7,
            longitude: -74.0,
            owner_id: owner.id.clone(),
            amenity_ids: vec![wifi.id.clone(), pool.id.clone()],
        })
        .await?;

    assert_eq!(place.owner_id, owner.id);
    let names: Vec<_> = place.amenities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Pool", "Wifi"]);

    let fetched = PlaceRepository::new(db).get_by_id(&place.id).await?.unwrap();
    assert_eq!(fetched.id, place.id);
    assert_eq!(fetched.amenities, place.amenities);

    Ok(())
}
