use super::*;

/// Tests that bookings are scoped to the requesting user.
///
/// Expected: only the guest's booking is returned
#[tokio::test]
async fn returns_only_users_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let booking = factory::create_booking(db, &place, &guest.id).await?;
    factory::create_booking(db, &place, &other.id).await?;

    let bookings = BookingRepository::new(db).get_by_user(&guest.id).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);
    assert_eq!(bookings[0].status, "confirmed");

    Ok(())
}
