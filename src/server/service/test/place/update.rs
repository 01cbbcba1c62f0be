use super::*;

/// Tests that only the owner or an admin can update a place.
///
/// Expected: Err(AuthError::Forbidden) for a stranger, Ok for owner and admin
#[tokio::test]
async fn restricts_updates_to_owner_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let service = PlaceService::new(db);
    let param = |price| UpdatePlaceParam {
        price: Some(price),
        ..Default::default()
    };

    let denied = service.update(&place.id, param(1.0), &stranger.id, false).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    let by_owner = service.update(&place.id, param(110.0), &owner.id, false).await?;
    assert_eq!(by_owner.price, 110.0);

    let by_admin = service.update(&place.id, param(120.0), &stranger.id, true).await?;
    assert_eq!(by_admin.price, 120.0);

    Ok(())
}

/// Tests that updates are validated like creation.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;

    let result = PlaceService::new(db)
        .update(
            &place.id,
            UpdatePlaceParam {
                latitude: Some(-91.0),
                ..Default::default()
            },
            &owner.id,
            false,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
