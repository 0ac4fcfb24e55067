//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::{AuthProvider, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let moderator = UserFactory::new(&db)
///     .username("mod")
///     .role(UserRole::Moderator)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    provider: AuthProvider,
    provider_id: String,
    role: UserRole,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - email: `"user_{id}@example.com"`
    /// - provider: `Github` with a unique provider id
    /// - role: `User`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            provider: AuthProvider::Github,
            provider_id: id.to_string(),
            role: UserRole::User,
            is_active: true,
        }
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the OAuth provider and provider-side ID for the user.
    pub fn provider(mut self, provider: AuthProvider, provider_id: impl Into<String>) -> Self {
        self.provider = provider;
        self.provider_id = provider_id.into();
        self
    }

    /// Sets the role for the user.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets whether the user account is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            provider: ActiveValue::Set(self.provider),
            provider_id: ActiveValue::Set(self.provider_id),
            avatar: ActiveValue::Set(String::new()),
            bio: ActiveValue::Set(String::new()),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role to assign to the user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: UserRole,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
