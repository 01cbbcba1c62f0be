use super::*;

/// Tests listing places with amenities loaded per place.
///
/// Expected: every place returned, amenities attached only where linked
#[tokio::test]
async fn lists_places_with_their_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let bare = factory::create_place(db, &owner.id).await?;
    let wifi = factory::create_amenity(db).await?;

    let repo = PlaceRepository::new(db);
    let equipped = repo
        .create(CreatePlaceParam {
            title: "Cabin".to_string(),
            description: String::new(),
            price: 80.0,
            latitude: 0.0,
            longitude: 0.0,
            owner_id: owner.id.clone(),
            amenity_ids: vec![wifi.id.clone()],
        })
        .await?;

    let places = repo.get_all().await?;

    assert_eq!(places.len(), 2);
    let bare_place = places.iter().find(|p| p.id == bare.id).unwrap();
    let equipped_place = places.iter().find(|p| p.id == equipped.id).unwrap();
    assert!(bare_place.amenities.is_empty());
    assert_eq!(equipped_place.amenities.len(), 1);
    assert_eq!(equipped_place.amenities[0].id, wifi.id);

    Ok(())
}

/// Tests listing when no places exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PlaceRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
