//! Comment domain models and parameters.
//!
//! Comments form a tree per post: a root comment has no parent and replies
//! reference their parent by ID. Domain comments carry their loaded replies,
//! nested to whatever depth the repository fetched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::comment::CommentDto;

/// Moderation state of a comment.
///
/// `Active` is the only state a comment is created in. `Deleted` and `Hidden`
/// are terminal: a comment that has left `Active` is no longer mutable
/// through the client-facing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Active,
    Deleted,
    Hidden,
}

impl CommentStatus {
    pub fn from_entity(entity: entity::comment::CommentStatus) -> Self {
        match entity {
            entity::comment::CommentStatus::Active => Self::Active,
            entity::comment::CommentStatus::Deleted => Self::Deleted,
            entity::comment::CommentStatus::Hidden => Self::Hidden,
        }
    }
}

/// A comment with its loaded replies.
///
/// `replies` holds whatever the originating query preloaded: one level for
/// single-comment fetches, up to the repository's depth limit for post
/// listings. An empty vector therefore means "none loaded", not necessarily
/// "none exist".
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub post_id: i32,
    pub author_id: i32,
    /// Parent comment ID; `None` for root comments.
    pub parent_id: Option<i32>,
    pub status: CommentStatus,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    /// Nested replies, newest first at every level.
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository
    /// boundary, with no replies loaded.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            post_id: entity.post_id,
            author_id: entity.author_id,
            parent_id: entity.parent_id,
            status: CommentStatus::from_entity(entity.status),
            likes: entity.likes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
            replies: Vec::new(),
        }
    }

    /// Converts the comment and its reply tree to a DTO for API responses.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            post_id: self.post_id,
            author_id: self.author_id,
            parent_id: self.parent_id,
            status: self.status,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            replies: self.replies.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a comment.
///
/// `author_id` is stamped from the authenticated principal and `post_id` from
/// the URL; neither is accepted from the request payload.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub author_id: i32,
    /// Comment being replied to; `None` creates a root comment.
    pub parent_id: Option<i32>,
    pub content: String,
}

/// Parameters for updating a comment.
///
/// Only the content is client-writable; all other fields of the stored record
/// are preserved.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub content: String,
}
