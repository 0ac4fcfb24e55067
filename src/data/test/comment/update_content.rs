use super::*;

/// Tests updating a comment's content.
///
/// Only the content changes; authorship, threading, and status survive the
/// update.
///
/// Expected: Ok with new content and other fields preserved
#[tokio::test]
async fn updates_only_the_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::comment::create_reply(db, post.id, user.id, root.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_content(reply.id, "edited".to_string())
        .await?;

    assert_eq!(updated.content, "edited");
    assert_eq!(updated.author_id, user.id);
    assert_eq!(updated.parent_id, Some(root.id));
    assert_eq!(updated.status, CommentStatus::Active);
    assert!(updated.updated_at >= reply.updated_at);

    Ok(())
}

/// Tests updating a nonexistent comment.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_comment() {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo.update_content(99999, "edited".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
