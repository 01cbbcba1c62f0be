use super::*;

/// Tests the review creation rules.
///
/// Verifies rating bounds, that owners cannot review their own place and that a
/// second review by the same guest conflicts.
///
/// Expected: first valid review succeeds, every other attempt fails
#[tokio::test]
async fn enforces_review_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let service = ReviewService::new(db);

    for rating in [0, 6] {
        let result = service.create(review(&guest.id, &place.id, rating)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let own = service.create(review(&owner.id, &place.id, 5)).await;
    assert!(matches!(own, Err(AppError::BadRequest(_))));

    let created = service.create(review(&guest.id, &place.id, 4)).await?;
    assert_eq!(created.rating, 4);

    let again = service.create(review(&guest.id, &place.id, 3)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests reviewing a place that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guest = factory::create_user(db).await?;

    let result = ReviewService::new(db)
        .create(review(&guest.id, "missing", 5))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
