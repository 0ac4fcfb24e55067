use super::*;

/// Tests creating a user from registration parameters.
///
/// New users start with the `user` role and an active account.
///
/// Expected: Ok with defaults applied
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "octocat".to_string(),
            email: "octocat@github.com".to_string(),
            provider: Provider::Github,
            provider_id: "583231".to_string(),
            avatar: "https://example.com/a.png".to_string(),
        })
        .await?;

    assert_eq!(user.username, "octocat");
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests the unique username constraint.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        username: "octocat".to_string(),
        email: "first@example.com".to_string(),
        provider: Provider::Github,
        provider_id: "1".to_string(),
        avatar: String::new(),
    };

    repo.create(params.clone()).await?;

    let result = repo
        .create(CreateUserParams {
            email: "second@example.com".to_string(),
            provider_id: "2".to_string(),
            ..params
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
