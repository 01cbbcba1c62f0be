use super::*;

/// Tests that a valid token resolves to the stored user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let tokens = tokens();
    let headers = bearer(&tokens.issue(&user.id, false)?);

    let caller = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(caller.id, user.id);

    Ok(())
}

/// Tests requests without a usable token.
///
/// Expected: MissingToken without a header, InvalidToken for a forged token
#[tokio::test]
async fn rejects_missing_and_forged_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let tokens = tokens();
    let forger = TokenService::new("other-secret", Duration::from_secs(60)).unwrap();

    let empty = HeaderMap::new();
    let missing = AuthGuard::new(db, &tokens, &empty).require(&[]).await;
    assert!(matches!(
        missing,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let forged_headers = bearer(&forger.issue(&user.id, true)?);
    let forged = AuthGuard::new(db, &tokens, &forged_headers).require(&[]).await;
    assert!(matches!(
        forged,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that admin status comes from the database, not the token.
///
/// Expected: Err(AuthError::Forbidden) for a non-admin whose token claims admin
#[tokio::test]
async fn reads_admin_flag_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let regular = factory::create_user(db).await?;
    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let tokens = tokens();

    let claims_admin = bearer(&tokens.issue(&regular.id, true)?);
    let denied = AuthGuard::new(db, &tokens, &claims_admin)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    let real_admin = bearer(&tokens.issue(&admin.id, false)?);
    let granted = AuthGuard::new(db, &tokens, &real_admin)
        .require(&[Permission::Admin])
        .await?;
    assert!(granted.is_admin);

    Ok(())
}

/// Tests a valid token for a user that was removed.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_of_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer(&tokens.issue("deleted-user", false)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

#[test]
fn parses_bearer_header() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert_eq!(bearer_token(&headers), None);
}
