use super::*;

/// Tests creating a root comment.
///
/// Verifies that the repository inserts the comment in active status with
/// the author, post, and content it was given and no parent.
///
/// Expected: Ok with comment created
#[tokio::test]
async fn creates_root_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, user.id).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: user.id,
            parent_id: None,
            content: "First!".to_string(),
        })
        .await?;

    assert_eq!(comment.content, "First!");
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author_id, user.id);
    assert_eq!(comment.parent_id, None);
    assert_eq!(comment.status, CommentStatus::Active);
    assert_eq!(comment.likes, 0);
    assert!(comment.deleted_at.is_none());

    // Verify comment exists in database
    let db_comment = Comment::find_by_id(comment.id).one(db).await?;
    assert!(db_comment.is_some());

    Ok(())
}

/// Tests creating a reply linked to its parent.
///
/// Expected: Ok with parent_id recorded
#[tokio::test]
async fn creates_reply_under_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let reply = repo
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: user.id,
            parent_id: Some(root.id),
            content: "Replying".to_string(),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(root.id));
    assert_eq!(reply.post_id, post.id);

    Ok(())
}
