use super::*;

/// Tests the blacklist lookup for a blacklisted user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_blacklisted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "555").await?;

    let repo = UserFlagRepository::new(db);

    assert!(repo.is_blacklisted(555).await?);

    Ok(())
}

/// Tests the blacklist lookup for an admin who is not blacklisted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "555").await?;

    let repo = UserFlagRepository::new(db);

    assert!(!repo.is_blacklisted(555).await?);

    Ok(())
}
