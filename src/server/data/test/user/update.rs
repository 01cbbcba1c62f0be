use super::*;

/// Tests a partial name update.
///
/// Verifies that only provided fields change and `updated_at` advances.
///
/// Expected: Ok(Some(User)) with new first name and original last name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .first_name("Grace")
        .last_name("Hopper")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            &created.id,
            UpdateUserParam {
                first_name: Some("Amazing".to_string()),
                last_name: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Amazing");
    assert_eq!(updated.last_name, "Hopper");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update("missing", UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
