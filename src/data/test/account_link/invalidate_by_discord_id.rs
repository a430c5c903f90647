use super::*;

/// Tests clearing every active link of a Discord user.
///
/// Expected: Ok(1), row invalid afterwards
#[tokio::test]
async fn clears_active_links_for_user() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let link = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .discord_id(42)
        .valid(true)
        .build()
        .await?;

    let rows = repo.invalidate_by_discord_id(42).await?;

    assert_eq!(rows, 1);
    assert!(!reload(&db, link.id).await.valid);

    Ok(())
}

/// Tests that invalidating a user twice matches nothing the second time.
///
/// Expected: second call returns zero rows
#[tokio::test]
async fn second_call_matches_nothing() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .discord_id(42)
        .valid(true)
        .build()
        .await?;

    let first_pass = repo.invalidate_by_discord_id(42).await?;
    let second_pass = repo.invalidate_by_discord_id(42).await?;

    assert_eq!(first_pass, 1);
    assert_eq!(second_pass, 0);

    Ok(())
}

/// Tests that a user with no active links yields a zero row count.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unlinked_user() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let rows = repo.invalidate_by_discord_id(99).await?;

    assert_eq!(rows, 0);

    Ok(())
}
