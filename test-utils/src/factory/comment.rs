//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::comment::CommentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Supports building reply chains by setting `parent_id`, and fixing
/// `created_at` for ordering-sensitive tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let reply = CommentFactory::new(&db, post.id, user.id)
///     .parent_id(root.id)
///     .content("replying")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    parent_id: Option<i32>,
    content: String,
    status: CommentStatus,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"` where id is auto-incremented
    /// - parent_id: `None` (root comment)
    /// - status: `Active`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `post_id` - ID of the post the comment belongs to
    /// - `author_id` - ID of the comment author
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            author_id,
            parent_id: None,
            content: format!("Comment {}", id),
            status: CommentStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Sets the parent comment, making this a reply.
    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the content for the comment.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the status for the comment.
    pub fn status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, for ordering-sensitive tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            post_id: ActiveValue::Set(self.post_id),
            author_id: ActiveValue::Set(self.author_id),
            parent_id: ActiveValue::Set(self.parent_id),
            status: ActiveValue::Set(self.status),
            likes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a root comment with default values.
///
/// Shorthand for `CommentFactory::new(db, post_id, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - ID of the post the comment belongs to
/// - `author_id` - ID of the comment author
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}

/// Creates a reply to an existing comment.
///
/// Shorthand for
/// `CommentFactory::new(db, post_id, author_id).parent_id(parent_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - ID of the post the comment belongs to
/// - `author_id` - ID of the comment author
/// - `parent_id` - ID of the comment being replied to
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created reply entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reply(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
    parent_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id)
        .parent_id(parent_id)
        .build()
        .await
}
