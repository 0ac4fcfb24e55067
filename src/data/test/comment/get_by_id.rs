use super::*;

/// Tests fetching a comment with its direct replies preloaded.
///
/// Expected: Ok with one level of replies attached
#[tokio::test]
async fn loads_comment_with_direct_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply1 = factory::comment::create_reply(db, post.id, user.id, root.id).await?;
    let reply2 = factory::comment::create_reply(db, post.id, user.id, root.id).await?;
    // A nested reply is not part of the first level
    let nested = factory::comment::create_reply(db, post.id, user.id, reply1.id).await?;

    let repo = CommentRepository::new(db);
    let comment = repo.get_by_id(root.id).await?.unwrap();

    assert_eq!(comment.id, root.id);
    assert_eq!(comment.replies.len(), 2);

    let reply_ids: Vec<i32> = comment.replies.iter().map(|r| r.id).collect();
    assert!(reply_ids.contains(&reply1.id));
    assert!(reply_ids.contains(&reply2.id));
    assert!(!reply_ids.contains(&nested.id));

    // Preloaded replies carry no grandchildren
    assert!(comment.replies.iter().all(|r| r.replies.is_empty()));

    Ok(())
}

/// Tests fetching a nonexistent comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let comment = repo.get_by_id(99999).await?;

    assert!(comment.is_none());

    Ok(())
}

/// Tests that a node deeper than the listing depth limit is still fully
/// reachable by ID.
///
/// Expected: Ok with the deep node and its children
#[tokio::test]
async fn deep_node_remains_reachable_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    // Build a chain two levels past the listing depth
    let mut parent = root.id;
    let mut chain = Vec::new();
    for _ in 0..(REPLY_DEPTH + 2) {
        let reply = factory::comment::create_reply(db, post.id, user.id, parent).await?;
        chain.push(reply.id);
        parent = reply.id;
    }

    let repo = CommentRepository::new(db);

    // The node at the depth limit is omitted from the listing tree, but a
    // direct fetch returns it with its child attached
    let deep_id = chain[REPLY_DEPTH];
    let deep = repo.get_by_id(deep_id).await?.unwrap();

    assert_eq!(deep.id, deep_id);
    assert_eq!(deep.replies.len(), 1);
    assert_eq!(deep.replies[0].id, chain[REPLY_DEPTH + 1]);

    Ok(())
}
