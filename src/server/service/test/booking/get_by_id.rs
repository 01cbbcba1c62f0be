use super::*;

/// Tests booking visibility.
///
/// Expected: guest and admin see the booking, another user is forbidden
#[tokio::test]
async fn restricts_booking_to_guest_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let booking = factory::create_booking(db, &place, &guest.id).await?;
    let service = BookingService::new(db);

    assert_eq!(service.get_by_id(&booking.id, &guest.id, false).await?.id, booking.id);
    assert_eq!(service.get_by_id(&booking.id, &owner.id, true).await?.id, booking.id);

    let denied = service.get_by_id(&booking.id, &owner.id, false).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    Ok(())
}
