use super::*;

/// Tests changing a user's role.
///
/// Expected: Ok with the new role persisted
#[tokio::test]
async fn sets_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_role(user.id, Role::Verified).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.role, Role::Verified);

    Ok(())
}

/// Tests deactivating a user account.
///
/// Expected: Ok with is_active cleared
#[tokio::test]
async fn deactivates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_active(user.id, false).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(!updated.is_active);

    Ok(())
}

/// Tests updating profile fields.
///
/// Expected: Ok with bio and avatar replaced, identity untouched
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParams {
            id: user.id,
            bio: "Writes about storage engines".to_string(),
            avatar: "https://example.com/new.png".to_string(),
        })
        .await?;

    assert_eq!(updated.bio, "Writes about storage engines");
    assert_eq!(updated.avatar, "https://example.com/new.png");
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Tests stamping the last login timestamp.
///
/// Expected: Ok with last_login set
#[tokio::test]
async fn stamps_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    assert!(user.last_login.is_none());

    let repo = UserRepository::new(db);
    repo.update_last_login(user.id).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.last_login.is_some());

    Ok(())
}
