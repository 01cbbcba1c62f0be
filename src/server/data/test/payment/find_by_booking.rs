use super::*;

/// Tests looking up the payment of a booking.
///
/// Expected: None before payment, the completed payment afterwards
#[tokio::test]
async fn finds_payment_for_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let place = factory::create_place(db, &owner.id).await?;
    let booking = factory::create_booking(db, &place, &guest.id).await?;

    let repo = PaymentRepository::new(db);
    assert!(repo.find_by_booking(&booking.id).await?.is_none());

    let payment = repo
        .create(CreatePaymentParam {
            booking_id: booking.id.clone(),
            user_id: guest.id.clone(),
            amount: booking.total_price,
            currency: "EUR".to_string(),
        })
        .await?;

    let found = repo.find_by_booking(&booking.id).await?.unwrap();
    assert_eq!(found.id, payment.id);
    assert_eq!(found.amount, booking.total_price);
    assert_eq!(found.status, "completed");

    Ok(())
}
