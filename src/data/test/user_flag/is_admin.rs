use super::*;

/// Tests the admin lookup for a user flagged as admin.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "123456789").await?;

    let repo = UserFlagRepository::new(db);

    assert!(repo.is_admin(123456789).await?);

    Ok(())
}

/// Tests the admin lookup for a user only flagged as blacklisted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_blacklisted_only_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "123456789").await?;

    let repo = UserFlagRepository::new(db);

    assert!(!repo.is_admin(123456789).await?);

    Ok(())
}

/// Tests the admin lookup for a user with no row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);

    assert!(!repo.is_admin(1).await?);

    Ok(())
}
