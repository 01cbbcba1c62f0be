use super::*;

/// Tests that the total price is nights times the nightly price.
///
/// Expected: Ok(Booking) with total_price = 4 * 100.0 and status confirmed
#[tokio::test]
async fn prices_booking_by_nights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;

    let booking = BookingService::new(db)
        .create(place.id.clone(), guest.id.clone(), date(1), date(5))
        .await?;

    assert_eq!(booking.total_price, 4.0 * place.price);
    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.user_id, guest.id);

    Ok(())
}

/// Tests that check-out must come after check-in.
///
/// Expected: Err(AppError::BadRequest) for equal and reversed dates
#[tokio::test]
async fn rejects_non_positive_stay() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let service = BookingService::new(db);

    for (check_in, check_out) in [(date(3), date(3)), (date(4), date(2))] {
        let result = service
            .create(place.id.clone(), owner.id.clone(), check_in, check_out)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let unknown = service
        .create("missing".to_string(), owner.id.clone(), date(1), date(2))
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}
