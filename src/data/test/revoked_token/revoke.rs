use super::*;

/// Tests the revoke / is_revoked round trip.
///
/// Expected: revoked jti reported as revoked, others not
#[tokio::test]
async fn revoked_token_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    repo.revoke("jti-1".to_string(), Utc::now() + Duration::hours(24))
        .await?;

    assert!(repo.is_revoked("jti-1").await?);
    assert!(!repo.is_revoked("jti-2").await?);

    Ok(())
}
