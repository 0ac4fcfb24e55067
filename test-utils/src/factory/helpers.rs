//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a post by that user, and a root comment on the post.
///
/// Convenience method for tests that need a full comment hierarchy without
/// caring about the specifics of the author or post. Use the individual
/// factories if you need to customize entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, post, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, user.id).await?;

    Ok((user, post, comment))
}
