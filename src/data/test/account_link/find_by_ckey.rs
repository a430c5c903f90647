use super::*;

/// Tests resolving the latest completed record for a ckey.
///
/// Expected: Ok(Some(AccountLink)) with a discord id set
#[tokio::test]
async fn finds_completed_link() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .discord_id(42)
        .valid(true)
        .build()
        .await?;

    let link = repo.find_by_ckey("shadowkoala").await?;

    assert!(link.is_some());
    assert_eq!(link.unwrap().discord_id, Some(42));

    Ok(())
}

/// Tests that records still awaiting verification are not returned.
///
/// A pending token row carries the ckey but no discord id yet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_pending_records() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .build()
        .await?;

    let link = repo.find_by_ckey("shadowkoala").await?;

    assert!(link.is_none());

    Ok(())
}
