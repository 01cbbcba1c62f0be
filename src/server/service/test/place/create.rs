use super::*;

/// Tests that out-of-range fields are rejected before insert.
///
/// Expected: Err(AppError::BadRequest) for negative price and bad coordinates
#[tokio::test]
async fn rejects_out_of_range_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let service = PlaceService::new(db);

    let invalid = [
        CreatePlaceParam {
            price: -1.0,
            ..place_param(&owner.id)
        },
        CreatePlaceParam {
            latitude: 90.5,
            ..place_param(&owner.id)
        },
        CreatePlaceParam {
            longitude: -180.5,
            ..place_param(&owner.id)
        },
        CreatePlaceParam {
            title: " ".to_string(),
            ..place_param(&owner.id)
        },
    ];

    for param in invalid {
        let result = service.create(param).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that boundary coordinates and a zero price are accepted.
///
/// Expected: Ok(Place)
#[tokio::test]
async fn accepts_boundary_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let place = PlaceService::new(db)
        .create(CreatePlaceParam {
            price: 0.0,
            latitude: -90.0,
            longitude: 180.0,
            ..place_param(&owner.id)
        })
        .await?;

    assert_eq!(place.latitude, -90.0);

    Ok(())
}

/// Tests that referencing an unknown amenity fails.
///
/// Expected: Err(AppError::BadRequest) naming the unknown ID
#[tokio::test]
async fn rejects_unknown_amenity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let wifi = factory::create_amenity(db).await?;

    let result = PlaceService::new(db)
        .create(CreatePlaceParam {
            amenity_ids: vec![wifi.id, "ghost".to_string()],
            ..place_param(&owner.id)
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("ghost")),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
