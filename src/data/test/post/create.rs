use super::*;
use entity::prelude::Post as PostEntity;
use sea_orm::EntityTrait;

/// Tests creating a post.
///
/// Expected: Ok with the stored row matching the domain model
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(PostEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let mut post = draft_post(user.id, "Hello World", "hello-world");
    post.tags = vec!["intro".to_string(), "rust".to_string()];

    let created = repo.create(post).await?;

    assert_eq!(created.title, "Hello World");
    assert_eq!(created.slug, "hello-world");
    assert_eq!(created.status, PostStatus::Draft);
    assert_eq!(created.tags, vec!["intro", "rust"]);
    assert_eq!(created.view_count, 0);

    let db_post = PostEntity::find_by_id(created.id).one(db).await?;
    assert!(db_post.is_some());

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Expected: Err on the second insert with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(PostEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    repo.create(draft_post(user.id, "Hello", "hello")).await?;
    let result = repo.create(draft_post(user.id, "Hello Again", "hello")).await;

    assert!(result.is_err());

    Ok(())
}
