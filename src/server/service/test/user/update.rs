use super::*;

/// Tests that a user can update their own names.
///
/// Expected: Ok(User) with the new first name
#[tokio::test]
async fn updates_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            &user.id,
            UpdateUserParam {
                first_name: Some("Renamed".to_string()),
                last_name: None,
            },
            &user.id,
            false,
        )
        .await?;

    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.last_name, user.last_name);

    Ok(())
}

/// Tests that a regular user cannot update someone else.
///
/// Expected: Err(AuthError::Forbidden), while an admin succeeds
#[tokio::test]
async fn forbids_updating_other_users_unless_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let service = UserService::new(db);
    let param = UpdateUserParam {
        first_name: Some("Changed".to_string()),
        last_name: None,
    };

    let denied = service.update(&target.id, param.clone(), &other.id, false).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    let allowed = service.update(&target.id, param, &other.id, true).await?;
    assert_eq!(allowed.first_name, "Changed");

    Ok(())
}

/// Tests updating a user that does not exist as an admin.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update("missing", UpdateUserParam::default(), "admin", true)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
