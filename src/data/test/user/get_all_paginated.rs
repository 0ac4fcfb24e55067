use super::*;

/// Tests pagination over the user listing.
///
/// Expected: Ok with page slices and correct total
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(0, 3).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 3);

    let (second_page, _) = repo.get_all_paginated(1, 3).await?;
    assert_eq!(second_page.len(), 2);

    Ok(())
}
