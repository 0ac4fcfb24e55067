//! Comment data repository for database operations.
//!
//! This module provides the `CommentRepository` for managing the comment tree
//! of each post: inserts, reply-preloading reads, content updates, and the
//! transactional cascade that soft-deletes a comment together with every
//! descendant reply.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::model::comment::{Comment, CreateCommentParams};

/// Number of reply levels loaded under each root comment by `get_by_post_id`.
///
/// Descendants below this depth are omitted from post listings; they remain
/// reachable through `get_by_id` on their parent.
pub const REPLY_DEPTH: usize = 3;

/// Repository providing database operations for the comment tree.
///
/// This struct holds a reference to the database connection and provides
/// methods for creating, reading, updating, and soft-deleting comment records.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment in `active` status.
    ///
    /// # Arguments
    /// - `params` - Create parameters (post, author, optional parent, content)
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            content: ActiveValue::Set(params.content),
            post_id: ActiveValue::Set(params.post_id),
            author_id: ActiveValue::Set(params.author_id),
            parent_id: ActiveValue::Set(params.parent_id),
            status: ActiveValue::Set(entity::comment::CommentStatus::Active),
            likes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Gets a comment by ID with one level of replies preloaded.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found, direct replies attached
    /// - `Ok(None)` - No comment with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let replies = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.eq(id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut comment = Comment::from_entity(entity);
        comment.replies = replies.into_iter().map(Comment::from_entity).collect();

        Ok(Some(comment))
    }

    /// Gets the root comments of a post with nested replies.
    ///
    /// Roots are ordered by creation time descending (newest first) and carry
    /// their reply trees assembled to `REPLY_DEPTH` levels, fetched one level
    /// at a time with a single `parent_id IN (...)` query per level. A post
    /// with no comments yields an empty vector; no post-existence check is
    /// performed.
    ///
    /// # Arguments
    /// - `post_id` - ID of the post whose comments to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Root comments with nested replies
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let roots = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::ParentId.is_null())
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut children: HashMap<i32, Vec<entity::comment::Model>> = HashMap::new();
        let mut parent_ids: Vec<i32> = roots.iter().map(|c| c.id).collect();

        for _ in 0..REPLY_DEPTH {
            if parent_ids.is_empty() {
                break;
            }

            let level = entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentId.is_in(parent_ids))
                .order_by_desc(entity::comment::Column::CreatedAt)
                .all(self.db)
                .await?;

            parent_ids = level.iter().map(|c| c.id).collect();
            for model in level {
                if let Some(parent_id) = model.parent_id {
                    children.entry(parent_id).or_default().push(model);
                }
            }
        }

        Ok(roots
            .into_iter()
            .map(|root| Self::assemble(root, &mut children))
            .collect())
    }

    /// Attaches the loaded children of `model` and recurses into them.
    ///
    /// Recursion depth is bounded by `REPLY_DEPTH` because only that many
    /// levels were fetched into the arena.
    fn assemble(
        model: entity::comment::Model,
        children: &mut HashMap<i32, Vec<entity::comment::Model>>,
    ) -> Comment {
        let mut comment = Comment::from_entity(model);

        if let Some(kids) = children.remove(&comment.id) {
            comment.replies = kids
                .into_iter()
                .map(|kid| Self::assemble(kid, children))
                .collect();
        }

        comment
    }

    /// Updates a comment's content on top of the stored record.
    ///
    /// Only the content and `updated_at` columns change; authorship, threading
    /// and status are preserved.
    ///
    /// # Arguments
    /// - `id` - ID of the comment to update
    /// - `content` - New content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(DbErr::RecordNotFound)` - No comment exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update_content(&self, id: i32, content: String) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found",
                id
            )))?;

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    /// Soft-deletes a comment and every descendant reply in one transaction.
    ///
    /// Marks the target `deleted`, then walks the reply tree with an explicit
    /// stack, marking each descendant; a parent is always marked before its
    /// children. The whole cascade commits or rolls back as a single unit, so
    /// concurrent readers observe either the fully-pre-cascade or the
    /// fully-post-cascade state. Concurrent cascades over overlapping subtrees
    /// are serialized only by the store's transaction isolation.
    ///
    /// # Arguments
    /// - `id` - ID of the comment whose subtree to soft-delete
    ///
    /// # Returns
    /// - `Ok(())` - Target and all descendants marked deleted
    /// - `Err(DbErr)` - Database error; no record in the subtree was changed
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        Self::mark_deleted(&txn, id, now).await?;

        let mut pending = vec![id];
        while let Some(parent_id) = pending.pop() {
            let child_ids: Vec<i32> = entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentId.eq(parent_id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|child| child.id)
                .collect();

            for child_id in child_ids {
                Self::mark_deleted(&txn, child_id, now).await?;
                pending.push(child_id);
            }
        }

        txn.commit().await
    }

    /// Marks a single comment as deleted within the given connection.
    async fn mark_deleted<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .col_expr(
                entity::comment::Column::Status,
                Expr::value(entity::comment::CommentStatus::Deleted),
            )
            .col_expr(entity::comment::Column::DeletedAt, Expr::value(now))
            .exec(conn)
            .await?;

        Ok(())
    }
}
