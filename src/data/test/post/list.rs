use super::*;

/// Tests pagination over the post listing.
///
/// Expected: Ok with page slices and correct total
#[tokio::test]
async fn paginates_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    for i in 0..5 {
        repo.create(draft_post(user.id, &format!("Post {}", i), &format!("post-{}", i)))
            .await?;
    }

    let (first_page, total) = repo.list(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    let (last_page, _) = repo.list(2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests that an empty table lists as an empty page.
///
/// Expected: Ok with no posts and zero total
#[tokio::test]
async fn lists_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let (posts, total) = repo.list(0, 10).await?;

    assert!(posts.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
