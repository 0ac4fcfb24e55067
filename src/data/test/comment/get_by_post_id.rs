use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::comment::CommentFactory;

/// Tests that root comments come back newest first.
///
/// Comments created at T1 < T2 < T3 must be returned as [T3, T2, T1].
///
/// Expected: Ok with descending creation order
#[tokio::test]
async fn orders_roots_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, user.id).await?;

    let now = Utc::now();
    let t1 = CommentFactory::new(db, post.id, user.id)
        .created_at(now - Duration::minutes(3))
        .build()
        .await?;
    let t2 = CommentFactory::new(db, post.id, user.id)
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let t3 = CommentFactory::new(db, post.id, user.id)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(post.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![t3.id, t2.id, t1.id]);

    Ok(())
}

/// Tests that only root comments appear at the top level, with replies
/// nested under their parents.
///
/// Expected: Ok with replies attached, not listed as roots
#[tokio::test]
async fn nests_replies_under_their_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::comment::create_reply(db, post.id, user.id, root.id).await?;
    let nested = factory::comment::create_reply(db, post.id, user.id, reply.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(post.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, root.id);
    assert_eq!(comments[0].replies.len(), 1);
    assert_eq!(comments[0].replies[0].id, reply.id);
    assert_eq!(comments[0].replies[0].replies.len(), 1);
    assert_eq!(comments[0].replies[0].replies[0].id, nested.id);

    Ok(())
}

/// Tests the reply depth limit on post listings.
///
/// A chain one level past the limit loses only its deepest node; this is a
/// truncation of the listing, not an error.
///
/// Expected: Ok with exactly REPLY_DEPTH nested levels
#[tokio::test]
async fn truncates_replies_at_depth_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    let mut parent = root.id;
    for _ in 0..(REPLY_DEPTH + 1) {
        let reply = factory::comment::create_reply(db, post.id, user.id, parent).await?;
        parent = reply.id;
    }

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(post.id).await?;

    // Walk down the chain; it must stop after REPLY_DEPTH levels
    let mut depth = 0;
    let mut node = &comments[0];
    while let Some(child) = node.replies.first() {
        depth += 1;
        node = child;
    }

    assert_eq!(depth, REPLY_DEPTH);

    Ok(())
}

/// Tests that a post with no comments yields an empty list.
///
/// No post-existence check is performed; an unknown post ID behaves the same
/// as a post without comments.
///
/// Expected: Ok with empty vector (not an error)
#[tokio::test]
async fn returns_empty_for_post_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(42).await?;

    assert!(comments.is_empty());

    Ok(())
}

/// Tests that comments on other posts stay out of the listing.
///
/// Expected: Ok with only the requested post's comments
#[tokio::test]
async fn scopes_listing_to_the_requested_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let post_a = factory::post::create_post(db, user.id).await?;
    let post_b = factory::post::create_post(db, user.id).await?;

    let on_a = factory::comment::create_comment(db, post_a.id, user.id).await?;
    factory::comment::create_comment(db, post_b.id, user.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(post_a.id).await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, on_a.id);

    Ok(())
}
