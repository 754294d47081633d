use super::*;

/// Tests finding flags for a seeded user.
///
/// Expected: Ok(Some) with both flags as seeded
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_flag::UserFlagFactory::new(db)
        .user_id("123456789")
        .admin(true)
        .blacklisted(true)
        .build()
        .await?;

    let repo = UserFlagRepository::new(db);
    let flags = repo.find_by_user_id(123456789).await?.unwrap();

    assert_eq!(flags.user_id, 123456789);
    assert!(flags.admin);
    assert!(flags.blacklisted);

    Ok(())
}

/// Tests looking up a user without any stored flags.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);
    let flags = repo.find_by_user_id(987654321).await?;

    assert!(flags.is_none());

    Ok(())
}

/// Tests that a hand-edited, non-numeric user ID surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupt_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "not-a-snowflake").await?;

    let repo = UserFlagRepository::new(db);
    let result = repo.get_all_admins().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
