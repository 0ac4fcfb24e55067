//! Post data repository for database operations.
//!
//! This module provides the `PostRepository` for managing blog post records:
//! creation, slug and paginated queries, full-record saves, hard deletes, and
//! the view counter. Content derivation (slugs, markdown rendering) happens in
//! the service layer; this repository persists what it is given.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::post::Post;

/// Repository providing database operations for post management.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post.
    ///
    /// All derived fields (slug, rendered HTML, status) must already be set on
    /// the domain model by the caller.
    ///
    /// # Arguments
    /// - `post` - Post to persist; the `id` field is ignored
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with generated ID
    /// - `Err(DbErr)` - Database error during insert (e.g. slug collision)
    pub async fn create(&self, post: Post) -> Result<Post, DbErr> {
        let entity = entity::post::ActiveModel {
            title: ActiveValue::Set(post.title),
            slug: ActiveValue::Set(post.slug),
            description: ActiveValue::Set(post.description),
            raw_content: ActiveValue::Set(post.raw_content),
            html_content: ActiveValue::Set(post.html_content),
            status: ActiveValue::Set(post.status.into_entity()),
            tags: ActiveValue::Set(serde_json::json!(post.tags)),
            view_count: ActiveValue::Set(post.view_count),
            author_id: ActiveValue::Set(post.author_id),
            created_at: ActiveValue::Set(post.created_at),
            updated_at: ActiveValue::Set(post.updated_at),
            published_at: ActiveValue::Set(post.published_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    /// Gets a post by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post found
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets a post by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post found
    /// - `Ok(None)` - No post with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets posts with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of posts to return per page
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts for the requested page and total post count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn list(&self, page: u64, per_page: u64) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let posts = entities.into_iter().map(Post::from_entity).collect();

        Ok((posts, total))
    }

    /// Gets all posts by an author, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::post::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Gets all posts carrying a tag, newest first.
    ///
    /// Tags are stored as a JSON array column, so membership is checked after
    /// decoding rather than pushed into SQL.
    pub async fn get_by_tag(&self, tag: &str) -> Result<Vec<Post>, DbErr> {
        let entities = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Post::from_entity)
            .filter(|post| post.tags.iter().any(|t| t == tag))
            .collect())
    }

    /// Saves an updated post on top of the stored record.
    ///
    /// # Arguments
    /// - `post` - Post with updated fields; must carry a valid `id`
    ///
    /// # Returns
    /// - `Ok(Post)` - The saved post
    /// - `Err(DbErr::RecordNotFound)` - No post exists with the given ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, post: Post) -> Result<Post, DbErr> {
        let existing = entity::prelude::Post::find_by_id(post.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Post with id {} not found",
                post.id
            )))?;

        let mut active_model: entity::post::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(post.title);
        active_model.slug = ActiveValue::Set(post.slug);
        active_model.description = ActiveValue::Set(post.description);
        active_model.raw_content = ActiveValue::Set(post.raw_content);
        active_model.html_content = ActiveValue::Set(post.html_content);
        active_model.status = ActiveValue::Set(post.status.into_entity());
        active_model.tags = ActiveValue::Set(serde_json::json!(post.tags));
        active_model.updated_at = ActiveValue::Set(post.updated_at);
        active_model.published_at = ActiveValue::Set(post.published_at);

        let entity = active_model.update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Deletes a post.
    ///
    /// Comments under the post are removed by the `ON DELETE CASCADE` foreign
    /// key.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Increments a post's view counter by one.
    ///
    /// # Returns
    /// - `Ok(())` - Counter incremented (no-op for a missing post)
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(id))
            .col_expr(
                entity::post::Column::ViewCount,
                Expr::col(entity::post::Column::ViewCount).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

}
