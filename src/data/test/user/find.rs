use super::*;

/// Tests finding a user by their provider identity.
///
/// Expected: Ok(Some) for the exact (provider, provider id) pair only
#[tokio::test]
async fn finds_user_by_provider_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .provider(entity::user::AuthProvider::Github, "583231")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo
        .find_by_provider_identity(Provider::Github, "583231")
        .await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    // Same ID at a different provider is a different identity
    let other_provider = repo
        .find_by_provider_identity(Provider::Google, "583231")
        .await?;
    assert!(other_provider.is_none());

    Ok(())
}

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("someone@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("someone@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests listing users by role.
///
/// Expected: Ok with only users carrying the requested role
#[tokio::test]
async fn finds_users_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    let moderator = factory::user::create_user_with_role(db, UserRole::Moderator).await?;

    let repo = UserRepository::new(db);
    let moderators = repo.find_by_role(Role::Moderator).await?;

    assert_eq!(moderators.len(), 1);
    assert_eq!(moderators[0].id, moderator.id);

    Ok(())
}
