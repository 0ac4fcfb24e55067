//! Comment business logic and orchestration.
//!
//! Validation and authorization always run before any storage mutation, so a
//! rejected request leaves no partial writes behind.

use sea_orm::DatabaseConnection;

use crate::{
    data::comment::CommentRepository,
    error::{comment::CommentError, AppError},
    model::{
        auth::Principal,
        comment::{Comment, CommentStatus, CreateCommentParams, UpdateCommentParams},
    },
    service::access,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment under a post.
    ///
    /// Rejects blank content before touching storage. When a parent is named,
    /// it must exist and belong to the same post -- a reply thread cannot span
    /// posts, and a comment can never reference a descendant that does not
    /// exist yet, which keeps the tree acyclic by construction.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if params.content.trim().is_empty() {
            return Err(CommentError::EmptyContent.into());
        }

        let repo = CommentRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            let parent = repo
                .get_by_id(parent_id)
                .await?
                .ok_or(CommentError::NotFound(parent_id))?;

            if parent.post_id != params.post_id {
                return Err(CommentError::InvalidParent {
                    parent_id,
                    post_id: params.post_id,
                }
                .into());
            }
        }

        Ok(repo.create(params).await?)
    }

    /// Gets a comment by ID with its direct replies.
    pub async fn get(&self, id: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| CommentError::NotFound(id).into())
    }

    /// Gets a post's comment tree: root comments newest first, replies nested
    /// to the repository's depth limit.
    ///
    /// A post with no comments (or an unknown post ID) yields an empty
    /// vector rather than an error.
    pub async fn get_post_comments(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        Ok(repo.get_by_post_id(post_id).await?)
    }

    /// Updates a comment's content on behalf of a principal.
    ///
    /// Rejects blank content, then loads the stored comment and applies the
    /// shared mutation policy against its recorded author. Only the content
    /// field is persisted on top of the existing record.
    pub async fn update(
        &self,
        params: UpdateCommentParams,
        principal: Principal,
    ) -> Result<Comment, AppError> {
        if params.content.trim().is_empty() {
            return Err(CommentError::EmptyContent.into());
        }

        let repo = CommentRepository::new(self.db);

        let existing = repo
            .get_by_id(params.id)
            .await?
            .ok_or(CommentError::NotFound(params.id))?;

        // Deleted and hidden comments are terminal
        if existing.status != CommentStatus::Active {
            return Err(CommentError::NotFound(params.id).into());
        }

        if !access::can_modify(existing.author_id, principal.user_id, principal.role) {
            return Err(CommentError::Unauthorized(params.id).into());
        }

        Ok(repo.update_content(params.id, params.content).await?)
    }

    /// Soft-deletes a comment and its whole reply subtree on behalf of a
    /// principal.
    ///
    /// Authorization is checked against the target comment's author; the
    /// cascade then marks every descendant within a single transaction.
    pub async fn delete(&self, id: i32, principal: Principal) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id))?;

        if existing.status != CommentStatus::Active {
            return Err(CommentError::NotFound(id).into());
        }

        if !access::can_modify(existing.author_id, principal.user_id, principal.role) {
            return Err(CommentError::Unauthorized(id).into());
        }

        repo.delete(id).await?;

        Ok(())
    }
}
