use super::*;

/// Tests blacklisting and then un-blacklisting a user.
///
/// Expected: Ok with the user blacklisted in between and no row afterwards
#[tokio::test]
async fn blacklists_and_restores_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);

    repo.set_blacklisted(777, true).await?;
    assert!(repo.is_blacklisted(777).await?);

    repo.set_blacklisted(777, false).await?;
    assert!(!repo.is_blacklisted(777).await?);
    assert!(repo.find_by_user_id(777).await?.is_none());

    Ok(())
}

/// Tests that blacklisting an admin keeps their admin flag.
///
/// Expected: Ok with both flags set
#[tokio::test]
async fn preserves_admin_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "777").await?;

    let repo = UserFlagRepository::new(db);
    repo.set_blacklisted(777, true).await?;

    assert!(repo.is_admin(777).await?);
    assert!(repo.is_blacklisted(777).await?);

    Ok(())
}
