use super::*;

/// Tests listing admins when admins and blacklisted users are mixed.
///
/// Expected: Ok with only admins, ordered by user ID
#[tokio::test]
async fn lists_only_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db, "300").await?;
    factory::create_admin(db, "100").await?;
    factory::create_blacklisted_user(db, "200").await?;

    let repo = UserFlagRepository::new(db);
    let admins = repo.get_all_admins().await?;

    let ids: Vec<u64> = admins.iter().map(|a| a.user_id).collect();
    assert_eq!(ids, vec![100, 300]);

    Ok(())
}

/// Tests listing admins on an empty table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserFlagRepository::new(db);

    assert!(repo.get_all_admins().await?.is_empty());

    Ok(())
}
