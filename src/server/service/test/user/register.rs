use super::*;

/// Tests registering a new user.
///
/// Verifies that names are trimmed, the email is lower-cased and the password is
/// stored as a verifiable hash.
///
/// Expected: Ok(User) with normalized fields and is_admin=false
#[tokio::test]
async fn registers_user_with_normalized_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = hasher();

    let user = UserService::new(db)
        .register(registration("Ada@Example.COM "), &passwords)
        .await?;

    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(!user.is_admin);
    assert_ne!(user.password_hash, "correct horse");
    assert!(
        passwords
            .verify("correct horse".to_string(), user.password_hash)
            .await?
    );

    Ok(())
}

/// Tests that an email differing only in case is a duplicate.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    service
        .register(registration("ada@example.com"), &hasher())
        .await?;
    let result = service
        .register(registration("ADA@example.com"), &hasher())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests validation of registration fields.
///
/// Expected: Err(AppError::BadRequest) for blank name, bad email and short password
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = UserService::new(db);

    let mut blank_name = registration("a@example.com");
    blank_name.first_name = "   ".to_string();
    let mut short_password = registration("b@example.com");
    short_password.password = "short".to_string();

    for param in [blank_name, registration("not-an-email"), short_password] {
        let result = service.register(param, &hasher()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

#[test]
fn normalizes_and_validates_email() {
    assert_eq!(normalize_email("  Guest@Mail.Com").unwrap(), "guest@mail.com");
    assert!(normalize_email("@mail.com").is_err());
    assert!(normalize_email("guest@").is_err());
    assert!(normalize_email("gu est@mail.com").is_err());
    assert!(normalize_email("a@b@c").is_err());
}
