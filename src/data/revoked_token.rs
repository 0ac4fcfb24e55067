//! Revoked-token data repository.
//!
//! Tokens are revoked by their `jti` claim at logout and checked on every
//! authenticated request. The repository is constructed over the injected
//! database connection like every other repository; there is no process-wide
//! blacklist state.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for the bearer-token blacklist.
pub struct RevokedTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevokedTokenRepository<'a> {
    /// Creates a new RevokedTokenRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RevokedTokenRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a token as revoked until its natural expiry.
    ///
    /// # Arguments
    /// - `jti` - Token ID claim of the revoked token
    /// - `expires_at` - The token's `exp` claim; the row is purgeable after this
    ///
    /// # Returns
    /// - `Ok(())` - Token recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn revoke(&self, jti: String, expires_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::revoked_token::ActiveModel {
            jti: ActiveValue::Set(jti),
            revoked_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether a token ID has been revoked.
    ///
    /// # Returns
    /// - `Ok(true)` - Token is on the blacklist
    /// - `Ok(false)` - Token has not been revoked
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_revoked(&self, jti: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RevokedToken::find()
            .filter(entity::revoked_token::Column::Jti.eq(jti))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes blacklist rows whose tokens have expired on their own.
    ///
    /// An expired token fails validation regardless of the blacklist, so the
    /// rows carry no information anymore.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows purged
    /// - `Err(DbErr)` - Database error during delete
    pub async fn purge_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lt(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
