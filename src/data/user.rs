//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the
//! database. It handles user creation, profile updates, role and activation
//! management, and queries by ID, email, provider identity, and role, with
//! conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, Provider, Role, UpdateProfileParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the `user` role and an active account.
    ///
    /// # Arguments
    /// - `params` - User creation parameters from a normalized OAuth identity
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (e.g. username/email collision)
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            provider: ActiveValue::Set(params.provider.into_entity()),
            provider_id: ActiveValue::Set(params.provider_id),
            avatar: ActiveValue::Set(params.avatar),
            bio: ActiveValue::Set(String::new()),
            role: ActiveValue::Set(entity::user::UserRole::User),
            is_active: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email.
    ///
    /// Used to enforce email uniqueness during registration.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their identity at an OAuth provider.
    ///
    /// # Arguments
    /// - `provider` - OAuth provider the identity belongs to
    /// - `provider_id` - User's ID at that provider
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Returning user
    /// - `Ok(None)` - No account for this identity yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_provider_identity(
        &self,
        provider: Provider,
        provider_id: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Provider.eq(provider.into_entity()))
            .filter(entity::user::Column::ProviderId.eq(provider_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users with a given role, ordered by username.
    pub async fn find_by_role(&self, role: Role) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.into_entity()))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets all users with pagination, ordered by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Updates a user's own profile fields (bio, avatar).
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user exists with the given ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.bio = ActiveValue::Set(params.bio);
        active_model.avatar = ActiveValue::Set(params.avatar);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(())` - Role updated (no-op for a missing user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                Expr::value(role.into_entity()),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets whether a user account is active.
    ///
    /// # Returns
    /// - `Ok(())` - Activation flag updated (no-op for a missing user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stamps the user's last login time with the current UTC timestamp.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (no-op for a missing user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::LastLogin, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
