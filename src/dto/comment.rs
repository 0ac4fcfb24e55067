use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::comment::CommentStatus;

/// A comment with its nested replies.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub post_id: i32,
    pub author_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub status: CommentStatus,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Replies nested up to the server's depth limit, newest first.
    pub replies: Vec<CommentDto>,
}

/// Request body for creating a comment under a post.
///
/// The author is taken from the bearer token and the post from the URL, so
/// neither appears here.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    /// Comment being replied to; omit to create a root comment.
    pub parent_id: Option<i32>,
}

/// Request body for updating a comment's content.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCommentDto {
    pub content: String,
}
