use super::*;

/// Tests saving an updated post on top of the stored record.
///
/// Expected: Ok with the new field values persisted
#[tokio::test]
async fn saves_updated_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let created = repo.create(draft_post(user.id, "Before", "before")).await?;

    let mut updated = created.clone();
    updated.title = "After".to_string();
    updated.status = PostStatus::Published;
    updated.published_at = Some(Utc::now());

    let saved = repo.update(updated).await?;

    assert_eq!(saved.title, "After");
    assert_eq!(saved.status, PostStatus::Published);
    assert!(saved.published_at.is_some());

    Ok(())
}

/// Tests updating a nonexistent post.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let mut post = draft_post(1, "Ghost", "ghost");
    post.id = 99999;

    let result = repo.update(post).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
