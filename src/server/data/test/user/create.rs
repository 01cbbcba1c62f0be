use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository assigns a UUID and stores every field.
///
/// Expected: Ok with a parseable UUID id and matching fields
#[tokio::test]
async fn creates_user_with_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(param("ada@example.com"))
        .await?;

    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.first_name, "Ada");
    assert!(!user.is_admin);

    Ok(())
}

/// Tests that a duplicate email violates the unique constraint.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.create(param("dup@example.com")).await?;
    let err = repo.create(param("dup@example.com")).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
