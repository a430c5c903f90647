use super::*;

/// Tests listing the completed link history of a ckey.
///
/// Pending rows are excluded; completed rows come back newest first.
///
/// Expected: Ok(Vec<AccountLink>) with two entries in timestamp order
#[tokio::test]
async fn returns_completed_links_newest_first() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let older = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .discord_id(42)
        .issued_at(Utc::now() - Duration::days(60))
        .build()
        .await?;
    let newer = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .discord_id(43)
        .issued_at(Utc::now() - Duration::days(1))
        .valid(true)
        .build()
        .await?;
    // Pending row for the same ckey, never completed
    AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .build()
        .await?;

    let links = repo.all_by_ckey("shadowkoala").await?;

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, newer.id);
    assert_eq!(links[1].id, older.id);

    Ok(())
}

/// Tests listing a ckey with no records at all.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unknown_ckey() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let links = repo.all_by_ckey("nobody").await?;

    assert!(links.is_empty());

    Ok(())
}
