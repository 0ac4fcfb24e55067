//! Cron jobs for automated maintenance tasks.

pub mod token_cleanup;
