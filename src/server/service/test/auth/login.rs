use super::*;

/// Tests logging in with valid credentials.
///
/// Verifies that the issued token decodes to the user's ID and admin flag, and that
/// the email lookup ignores case.
///
/// Expected: Ok(token) whose claims identify the user
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .email("host@example.com")
        .admin(true)
        .build()
        .await?;
    let tokens = TokenService::new("login-secret", Duration::from_secs(60)).unwrap();
    let passwords = PasswordHasher::new(4).unwrap();

    let token = AuthService::new(db, &tokens, &passwords)
        .login("HOST@example.com", factory::user::DEFAULT_PASSWORD.to_string())
        .await?;

    let claims = tokens.verify(&token)?;
    assert_eq!(claims.sub, user.id);
    assert!(claims.is_admin);

    Ok(())
}

/// Tests that wrong passwords and unknown emails fail identically.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("guest@example.com")
        .build()
        .await?;
    let tokens = TokenService::new("login-secret", Duration::from_secs(60)).unwrap();
    let passwords = PasswordHasher::new(4).unwrap();
    let service = AuthService::new(db, &tokens, &passwords);

    let wrong_password = service
        .login("guest@example.com", "wrong-password".to_string())
        .await;
    let unknown_email = service
        .login("ghost@example.com", factory::user::DEFAULT_PASSWORD.to_string())
        .await;

    for result in [wrong_password, unknown_email] {
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}
