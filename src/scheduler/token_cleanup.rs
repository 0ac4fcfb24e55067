use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::revoked_token::RevokedTokenRepository, error::AppError};

/// Starts the revoked-token cleanup scheduler.
///
/// Runs hourly and deletes blacklist rows whose tokens have expired on their
/// own; an expired token fails validation regardless of the blacklist, so the
/// rows only cost lookup time.
///
/// # Arguments
/// - `db` - Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Run at the top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_tokens(&db).await {
                tracing::error!("Error purging expired revoked tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Revoked token cleanup scheduler started");

    Ok(())
}

/// Deletes expired rows from the revocation table.
async fn purge_expired_tokens(db: &DatabaseConnection) -> Result<(), AppError> {
    let purged = RevokedTokenRepository::new(db).purge_expired().await?;

    if purged > 0 {
        tracing::info!("Purged {} expired revoked tokens", purged);
    }

    Ok(())
}
