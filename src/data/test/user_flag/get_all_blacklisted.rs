use super::*;

/// Tests listing blacklisted users.
///
/// Expected: Ok with only blacklisted users
#[tokio::test]
async fn lists_only_blacklisted_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "100").await?;
    factory::create_blacklisted_user(db, "200").await?;

    let repo = UserFlagRepository::new(db);
    let blocked = repo.get_all_blacklisted().await?;

    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].user_id, 200);
    assert!(blocked[0].blacklisted);

    Ok(())
}
