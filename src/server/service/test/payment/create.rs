use super::*;

/// Tests paying for an own booking.
///
/// Verifies that the amount comes from the booking, the currency is normalized and a
/// second payment for the same booking conflicts.
///
/// Expected: first payment completed, second Err(AppError::Conflict)
#[tokio::test]
async fn pays_booking_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let booking = factory::create_booking(db, &place, &guest.id).await?;
    let service = PaymentService::new(db);

    let payment = service
        .create(booking.id.clone(), guest.id.clone(), Some("eur".to_string()))
        .await?;

    assert_eq!(payment.amount, booking.total_price);
    assert_eq!(payment.currency, "EUR");
    assert_eq!(payment.status, "completed");

    let again = service
        .create(booking.id.clone(), guest.id.clone(), None)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests paying for someone else's booking and with a bad currency.
///
/// Expected: Err(AuthError::Forbidden) and Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_foreign_booking_and_bad_currency() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let booking = factory::create_booking(db, &place, &guest.id).await?;
    let service = PaymentService::new(db);

    let foreign = service
        .create(booking.id.clone(), owner.id.clone(), None)
        .await;
    assert!(matches!(
        foreign,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    let bad_currency = service
        .create(booking.id.clone(), guest.id.clone(), Some("dollars".to_string()))
        .await;
    assert!(matches!(bad_currency, Err(AppError::BadRequest(_))));

    let payment = service.create(booking.id, guest.id.clone(), None).await?;
    assert_eq!(payment.currency, "USD");
    assert!(service.get_by_id(&payment.id, &owner.id, false).await.is_err());
    assert_eq!(service.get_by_id(&payment.id, &guest.id, false).await?.id, payment.id);

    Ok(())
}
