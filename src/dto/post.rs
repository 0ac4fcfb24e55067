use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::post::PostStatus;

/// A blog post with rendered content and metadata.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub raw_content: String,
    pub html_content: String,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub view_count: i64,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Request body for creating a post.
///
/// The slug and HTML rendering are derived server-side; new posts always
/// start as drafts.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub raw_content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for updating a post.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePostDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub raw_content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: PostStatus,
}

/// Paginated collection of posts with metadata.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
