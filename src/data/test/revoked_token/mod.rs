use crate::data::revoked_token::RevokedTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod purge_expired;
mod revoke;
