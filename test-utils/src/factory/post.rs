//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::post::PostStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    raw_content: String,
    status: PostStatus,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"` where id is auto-incremented
    /// - slug: `"post-{id}"`
    /// - raw_content: a short markdown paragraph
    /// - status: `Draft`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the user authoring the post
    ///
    /// # Returns
    /// - `PostFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            raw_content: "Some *markdown* content.".to_string(),
            status: PostStatus::Draft,
        }
    }

    /// Sets the title for the post.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the slug for the post.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the raw markdown content for the post.
    pub fn raw_content(mut self, raw_content: impl Into<String>) -> Self {
        self.raw_content = raw_content.into();
        self
    }

    /// Sets the publication status for the post.
    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(String::new()),
            raw_content: ActiveValue::Set(self.raw_content),
            html_content: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            tags: ActiveValue::Set(serde_json::json!([])),
            view_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
///
/// Shorthand for `PostFactory::new(db, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - ID of the user authoring the post
///
/// # Returns
/// - `Ok(entity::post::Model)` - Created post entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
