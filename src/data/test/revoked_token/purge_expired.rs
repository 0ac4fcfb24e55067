use super::*;

/// Tests that the purge removes only rows whose tokens already expired.
///
/// Expected: expired row gone, live row kept
#[tokio::test]
async fn purges_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    repo.revoke("expired".to_string(), Utc::now() - Duration::hours(1))
        .await?;
    repo.revoke("live".to_string(), Utc::now() + Duration::hours(1))
        .await?;

    let purged = repo.purge_expired().await?;

    assert_eq!(purged, 1);
    assert!(!repo.is_revoked("expired").await?);
    assert!(repo.is_revoked("live").await?);

    Ok(())
}
