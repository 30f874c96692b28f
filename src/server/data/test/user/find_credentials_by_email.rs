use super::*;

/// Tests looking up login credentials by email.
///
/// Verifies that the stored hash is returned alongside the hash-free domain
/// model.
///
/// Expected: Ok(Some(UserCredentials)) with the stored hash
#[tokio::test]
async fn returns_user_with_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .email("login@example.com")
        .password_hash("$2b$12$specific-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, entity.id);
    assert_eq!(credentials.user.email, "login@example.com");
    assert_eq!(credentials.password_hash, "$2b$12$specific-hash");

    Ok(())
}

/// Tests looking up an email that is not registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
