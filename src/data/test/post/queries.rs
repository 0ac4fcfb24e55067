use super::*;

/// Tests fetching a post by slug.
///
/// Expected: Ok(Some) for an existing slug, Ok(None) otherwise
#[tokio::test]
async fn finds_post_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    let created = repo.create(draft_post(user.id, "Findable", "findable")).await?;

    let found = repo.get_by_slug("findable").await?;
    assert_eq!(found.map(|p| p.id), Some(created.id));

    let missing = repo.get_by_slug("no-such-slug").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests listing an author's posts.
///
/// Expected: Ok with only that author's posts
#[tokio::test]
async fn finds_posts_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);
    repo.create(draft_post(alice.id, "A one", "a-one")).await?;
    repo.create(draft_post(alice.id, "A two", "a-two")).await?;
    repo.create(draft_post(bob.id, "B one", "b-one")).await?;

    let posts = repo.get_by_author(alice.id).await?;

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.author_id == alice.id));

    Ok(())
}

/// Tests filtering posts by tag.
///
/// Expected: Ok with only posts carrying the tag
#[tokio::test]
async fn finds_posts_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PostRepository::new(db);

    let mut tagged = draft_post(user.id, "Tagged", "tagged");
    tagged.tags = vec!["rust".to_string(), "web".to_string()];
    let tagged = repo.create(tagged).await?;

    let mut other = draft_post(user.id, "Other", "other");
    other.tags = vec!["go".to_string()];
    repo.create(other).await?;

    let posts = repo.get_by_tag("rust").await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, tagged.id);

    Ok(())
}
