use super::*;

/// Counts comments in `deleted` status for assertion helpers.
async fn deleted_count(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    use sea_orm::PaginatorTrait;

    Comment::find()
        .filter(entity::comment::Column::Status.eq(entity::comment::CommentStatus::Deleted))
        .count(db)
        .await
}

/// Tests soft-deleting a leaf comment.
///
/// Expected: Ok with the comment marked deleted and deleted_at stamped
#[tokio::test]
async fn marks_single_comment_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    repo.delete(comment.id).await?;

    let db_comment = Comment::find_by_id(comment.id).one(db).await?.unwrap();
    assert_eq!(
        db_comment.status,
        entity::comment::CommentStatus::Deleted
    );
    assert!(db_comment.deleted_at.is_some());

    Ok(())
}

/// Tests cascading over a linear reply chain.
///
/// Deleting the root of a chain with N descendants marks exactly N+1 records.
///
/// Expected: Ok with the whole chain deleted
#[tokio::test]
async fn cascades_through_a_chain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    let mut parent = root.id;
    for _ in 0..5 {
        let reply = factory::comment::create_reply(db, post.id, user.id, parent).await?;
        parent = reply.id;
    }

    let repo = CommentRepository::new(db);
    repo.delete(root.id).await?;

    assert_eq!(deleted_count(db).await?, 6);

    Ok(())
}

/// Tests cascading over a branching subtree.
///
/// The root has two children, each with two children of their own; all seven
/// records transition to deleted.
///
/// Expected: Ok with every node in the subtree deleted
#[tokio::test]
async fn cascades_through_branches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    for _ in 0..2 {
        let child = factory::comment::create_reply(db, post.id, user.id, root.id).await?;
        for _ in 0..2 {
            factory::comment::create_reply(db, post.id, user.id, child.id).await?;
        }
    }

    let repo = CommentRepository::new(db);
    repo.delete(root.id).await?;

    assert_eq!(deleted_count(db).await?, 7);

    Ok(())
}

/// Tests that the cascade is scoped to the target's subtree.
///
/// A sibling subtree under the same root and comments on another post must
/// keep their status.
///
/// Expected: Ok with zero records outside the subtree changed
#[tokio::test]
async fn leaves_other_subtrees_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, user.id).await?;
    let other_post = factory::post::create_post(db, user.id).await?;

    let target = factory::comment::create_comment(db, post.id, user.id).await?;
    let target_child = factory::comment::create_reply(db, post.id, user.id, target.id).await?;

    let sibling = factory::comment::create_comment(db, post.id, user.id).await?;
    let sibling_child = factory::comment::create_reply(db, post.id, user.id, sibling.id).await?;
    let elsewhere = factory::comment::create_comment(db, other_post.id, user.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete(target.id).await?;

    for id in [target.id, target_child.id] {
        let model = Comment::find_by_id(id).one(db).await?.unwrap();
        assert_eq!(model.status, entity::comment::CommentStatus::Deleted);
    }

    for id in [sibling.id, sibling_child.id, elsewhere.id] {
        let model = Comment::find_by_id(id).one(db).await?.unwrap();
        assert_eq!(model.status, entity::comment::CommentStatus::Active);
        assert!(model.deleted_at.is_none());
    }

    Ok(())
}

/// Tests cascading from the middle of a thread.
///
/// Deleting an inner node takes its descendants but spares its ancestors.
///
/// Expected: Ok with the ancestor still active
#[tokio::test]
async fn spares_ancestors_of_the_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;
    let middle = factory::comment::create_reply(db, post.id, user.id, root.id).await?;
    let leaf = factory::comment::create_reply(db, post.id, user.id, middle.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete(middle.id).await?;

    let root_model = Comment::find_by_id(root.id).one(db).await?.unwrap();
    assert_eq!(root_model.status, entity::comment::CommentStatus::Active);

    for id in [middle.id, leaf.id] {
        let model = Comment::find_by_id(id).one(db).await?.unwrap();
        assert_eq!(model.status, entity::comment::CommentStatus::Deleted);
    }

    Ok(())
}

/// Tests cascading a subtree deeper than the listing depth limit.
///
/// The cascade walks the full tree regardless of the read-side depth bound.
///
/// Expected: Ok with every node of the deep chain deleted
#[tokio::test]
async fn cascades_past_the_listing_depth_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_comment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post, root) = factory::helpers::create_comment_with_dependencies(db).await?;

    let mut parent = root.id;
    for _ in 0..(REPLY_DEPTH * 3) {
        let reply = factory::comment::create_reply(db, post.id, user.id, parent).await?;
        parent = reply.id;
    }

    let repo = CommentRepository::new(db);
    repo.delete(root.id).await?;

    assert_eq!(deleted_count(db).await?, (REPLY_DEPTH * 3 + 1) as u64);

    Ok(())
}
