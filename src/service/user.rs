//! User business logic and orchestration.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        auth::ExternalIdentity,
        user::{CreateUserParams, PaginatedUsers, Role, UpdateProfileParams, User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user from a normalized OAuth identity, or returns the
    /// existing account for a returning user.
    ///
    /// A returning user is recognized by their (provider, provider id) pair.
    /// For first-time registrations the email must look like an email and not
    /// belong to another account.
    pub async fn register(&self, identity: ExternalIdentity) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo
            .find_by_provider_identity(identity.provider, &identity.id)
            .await?
        {
            return Ok(existing);
        }

        if !identity.email.contains('@') || !identity.email.contains('.') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if repo.find_by_email(&identity.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let user = repo
            .create(CreateUserParams {
                username: identity.login,
                email: identity.email,
                provider: identity.provider,
                provider_id: identity.id,
                avatar: identity.avatar_url,
            })
            .await?;

        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets all users with pagination.
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let repo = UserRepository::new(self.db);

        let (users, total) = repo.get_all_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets all users with a given role.
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_role(role).await?)
    }

    /// Updates a user's own profile fields.
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.update_profile(params).await?)
    }

    /// Promotes a user to the verified role.
    pub async fn verify(&self, id: i32) -> Result<User, AppError> {
        self.set_role(id, Role::Verified).await
    }

    /// Sets a user's role.
    pub async fn set_role(&self, id: i32, role: Role) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        // Confirm existence first so a missing user surfaces as 404
        let _ = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        repo.set_role(id, role).await?;

        self.get(id).await
    }

    /// Deactivates a user account.
    ///
    /// Deactivated accounts fail authentication on their next request.
    pub async fn deactivate(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let _ = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        repo.set_active(id, false).await?;

        self.get(id).await
    }

    /// Stamps the user's last login time.
    pub async fn update_last_login(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        repo.update_last_login(id).await?;

        Ok(())
    }
}
