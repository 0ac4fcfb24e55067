//! Post business logic and orchestration.
//!
//! Derives everything the client doesn't supply: slugs from titles, HTML from
//! markdown, and the first-publication timestamp. Mutations run through the
//! same authorization policy as comments.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::post::PostRepository,
    error::{post::PostError, AppError},
    model::{
        auth::Principal,
        post::{CreatePostParams, PaginatedPosts, Post, PostStatus, UpdatePostParams},
    },
    service::access,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post as a draft.
    ///
    /// The slug is generated from the title and the markdown content is
    /// rendered to HTML before the insert.
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        validate(&params.title, &params.raw_content)?;

        let repo = PostRepository::new(self.db);
        let now = Utc::now();

        let post = Post {
            id: 0,
            slug: slug::slugify(&params.title),
            html_content: render_html(&params.raw_content),
            title: params.title,
            description: params.description,
            raw_content: params.raw_content,
            status: PostStatus::Draft,
            tags: params.tags,
            view_count: 0,
            author_id: params.author_id,
            created_at: now,
            updated_at: now,
            published_at: None,
        };

        Ok(repo.create(post).await?)
    }

    /// Gets a post by ID.
    pub async fn get(&self, id: i32) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| PostError::NotFound(id.to_string()).into())
    }

    /// Gets a post by its slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        repo.get_by_slug(slug)
            .await?
            .ok_or_else(|| PostError::NotFound(slug.to_string()).into())
    }

    /// Gets posts with pagination, newest first.
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedPosts, AppError> {
        let repo = PostRepository::new(self.db);

        let (posts, total) = repo.list(page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedPosts {
            posts,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets all posts by an author, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        Ok(repo.get_by_author(author_id).await?)
    }

    /// Gets all posts carrying a tag, newest first.
    pub async fn get_by_tag(&self, tag: &str) -> Result<Vec<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        Ok(repo.get_by_tag(tag).await?)
    }

    /// Updates a post on behalf of a principal.
    ///
    /// Re-renders the HTML only when the markdown changed and re-slugs only
    /// when the title changed. The first transition to `Published` stamps
    /// `published_at`; later transitions leave it untouched.
    pub async fn update(
        &self,
        params: UpdatePostParams,
        principal: Principal,
    ) -> Result<Post, AppError> {
        validate(&params.title, &params.raw_content)?;

        let repo = PostRepository::new(self.db);

        let existing = repo
            .get_by_id(params.id)
            .await?
            .ok_or(PostError::NotFound(params.id.to_string()))?;

        if !access::can_modify(existing.author_id, principal.user_id, principal.role) {
            return Err(PostError::Unauthorized(params.id).into());
        }

        let html_content = if params.raw_content != existing.raw_content {
            render_html(&params.raw_content)
        } else {
            existing.html_content
        };

        let slug = if params.title != existing.title {
            slug::slugify(&params.title)
        } else {
            existing.slug
        };

        let published_at = if params.status == PostStatus::Published
            && existing.status != PostStatus::Published
            && existing.published_at.is_none()
        {
            Some(Utc::now())
        } else {
            existing.published_at
        };

        let post = Post {
            id: params.id,
            title: params.title,
            slug,
            description: params.description,
            raw_content: params.raw_content,
            html_content,
            status: params.status,
            tags: params.tags,
            view_count: existing.view_count,
            author_id: existing.author_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
            published_at,
        };

        Ok(repo.update(post).await?)
    }

    /// Deletes a post on behalf of a principal.
    pub async fn delete(&self, id: i32, principal: Principal) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))?;

        if !access::can_modify(existing.author_id, principal.user_id, principal.role) {
            return Err(PostError::Unauthorized(id).into());
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Increments a post's view counter.
    pub async fn increment_view_count(&self, id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        repo.increment_view_count(id).await?;

        Ok(())
    }
}

/// Validates the client-writable content fields of a post.
fn validate(title: &str, raw_content: &str) -> Result<(), PostError> {
    if title.trim().is_empty() {
        return Err(PostError::EmptyTitle);
    }
    if raw_content.trim().is_empty() {
        return Err(PostError::EmptyContent);
    }

    Ok(())
}

/// Renders markdown to HTML.
fn render_html(markdown: &str) -> String {
    let parser = pulldown_cmark::Parser::new_ext(markdown, pulldown_cmark::Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    html
}
