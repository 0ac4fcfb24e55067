use super::*;

/// Tests that each increment adds exactly one view.
///
/// Expected: Ok with the counter reflecting every call
#[tokio::test]
async fn increments_view_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let created = repo.create(draft_post(user.id, "Counted", "counted")).await?;

    repo.increment_view_count(created.id).await?;
    repo.increment_view_count(created.id).await?;
    repo.increment_view_count(created.id).await?;

    let post = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(post.view_count, 3);

    Ok(())
}
