use super::*;

/// Tests granting admin status to a user without a row.
///
/// Expected: Ok with the user now an admin and not blacklisted
#[tokio::test]
async fn grants_admin_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);
    repo.set_admin(123456789, true).await?;

    let flags = repo.find_by_user_id(123456789).await?.unwrap();
    assert!(flags.admin);
    assert!(!flags.blacklisted);

    Ok(())
}

/// Tests that granting admin twice keeps a single row.
///
/// Expected: Ok with exactly one admin listed
#[tokio::test]
async fn granting_twice_keeps_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);
    repo.set_admin(42, true).await?;
    repo.set_admin(42, true).await?;

    assert_eq!(repo.get_all_admins().await?.len(), 1);

    Ok(())
}

/// Tests that granting admin preserves an existing blacklist flag.
///
/// Expected: Ok with both flags set
#[tokio::test]
async fn preserves_blacklist_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_user(db, "42").await?;

    let repo = UserFlagRepository::new(db);
    repo.set_admin(42, true).await?;

    let flags = repo.find_by_user_id(42).await?.unwrap();
    assert!(flags.admin);
    assert!(flags.blacklisted);

    Ok(())
}

/// Tests revoking the only flag a user has.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn revoking_last_flag_deletes_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "42").await?;

    let repo = UserFlagRepository::new(db);
    repo.set_admin(42, false).await?;

    assert!(repo.find_by_user_id(42).await?.is_none());

    Ok(())
}

/// Tests revoking admin from a user who is also blacklisted.
///
/// Expected: Ok with the row kept and only the blacklist flag set
#[tokio::test]
async fn revoking_keeps_row_with_other_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_flag::UserFlagFactory::new(db)
        .user_id("42")
        .admin(true)
        .blacklisted(true)
        .build()
        .await?;

    let repo = UserFlagRepository::new(db);
    repo.set_admin(42, false).await?;

    let flags = repo.find_by_user_id(42).await?.unwrap();
    assert!(!flags.admin);
    assert!(flags.blacklisted);

    Ok(())
}

/// Tests revoking admin status for a user with no row.
///
/// Expected: Ok (no-op)
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);
    let result = repo.set_admin(999999999, false).await;

    assert!(result.is_ok());

    Ok(())
}
