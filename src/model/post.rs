//! Post domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::post::PostDto;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn from_entity(entity: entity::post::PostStatus) -> Self {
        match entity {
            entity::post::PostStatus::Draft => Self::Draft,
            entity::post::PostStatus::Published => Self::Published,
            entity::post::PostStatus::Archived => Self::Archived,
        }
    }

    pub fn into_entity(self) -> entity::post::PostStatus {
        match self {
            Self::Draft => entity::post::PostStatus::Draft,
            Self::Published => entity::post::PostStatus::Published,
            Self::Archived => entity::post::PostStatus::Archived,
        }
    }
}

/// A blog post with rendered content and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    /// URL-friendly identifier derived from the title.
    pub slug: String,
    pub description: String,
    /// Author-supplied markdown source.
    pub raw_content: String,
    /// HTML rendered from `raw_content`.
    pub html_content: String,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub view_count: i64,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set the first time the post transitions to `Published`.
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Converts an entity model to a post domain model at the repository boundary.
    ///
    /// Tags are stored as a JSON array; rows written outside the application
    /// with a non-array value decode to an empty tag list.
    pub fn from_entity(entity: entity::post::Model) -> Self {
        let tags = serde_json::from_value(entity.tags).unwrap_or_default();

        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            raw_content: entity.raw_content,
            html_content: entity.html_content,
            status: PostStatus::from_entity(entity.status),
            tags,
            view_count: entity.view_count,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            published_at: entity.published_at,
        }
    }

    /// Converts the post domain model to a DTO for API responses.
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            raw_content: self.raw_content,
            html_content: self.html_content,
            status: self.status,
            tags: self.tags,
            view_count: self.view_count,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
        }
    }
}

/// Parameters for creating a post.
///
/// The slug and rendered HTML are derived by the service; new posts always
/// start as drafts.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub raw_content: String,
    pub tags: Vec<String>,
}

/// Parameters for updating a post.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub raw_content: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
}

/// Paginated collection of posts with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    /// Posts for this page, newest first.
    pub posts: Vec<Post>,
    /// Total number of posts across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of posts per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedPosts {
    /// Converts the paginated posts domain model to a DTO for API responses.
    pub fn into_dto(self) -> crate::dto::post::PaginatedPostsDto {
        crate::dto::post::PaginatedPostsDto {
            posts: self.posts.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
