use super::*;

/// Tests detecting an existing review by the same user for the same place.
///
/// Expected: true for the reviewed place only
#[tokio::test]
async fn detects_existing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let reviewed = factory::create_place(db, &owner.id).await?;
    let other = factory::create_place(db, &owner.id).await?;

    let repo = ReviewRepository::new(db);
    repo.create(CreateReviewParam {
        text: "Lovely".to_string(),
        rating: 5,
        user_id: guest.id.clone(),
        place_id: reviewed.id.clone(),
    })
    .await?;

    assert!(repo.exists_for(&guest.id, &reviewed.id).await?);
    assert!(!repo.exists_for(&guest.id, &other.id).await?);
    assert!(!repo.exists_for(&owner.id, &reviewed.id).await?);

    Ok(())
}
