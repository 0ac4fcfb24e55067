use super::*;
use entity::prelude::Post as PostEntity;
use sea_orm::EntityTrait;

/// Tests deleting a post.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(PostEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let created = repo.create(draft_post(user.id, "Doomed", "doomed")).await?;

    repo.delete(created.id).await?;

    let db_post = PostEntity::find_by_id(created.id).one(db).await?;
    assert!(db_post.is_none());

    Ok(())
}

/// Tests deleting a nonexistent post succeeds silently.
///
/// Expected: Ok (delete is idempotent)
#[tokio::test]
async fn deletes_nonexistent_post_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(PostEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo.delete(99999).await;

    assert!(result.is_ok());

    Ok(())
}
