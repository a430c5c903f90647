use super::*;

/// Tests resolving a freshly issued token.
///
/// Expected: Ok(Some(AccountLink)) with the issuing ckey
#[tokio::test]
async fn resolves_token_inside_window() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .token("fresh-token")
        .build()
        .await?;

    let link = repo.find_by_token("fresh-token").await?;

    assert!(link.is_some());
    let link = link.unwrap();
    assert_eq!(link.ckey.as_deref(), Some("shadowkoala"));
    assert_eq!(link.one_time_token, "fresh-token");
    assert_eq!(link.discord_id, None);

    Ok(())
}

/// Tests that a token just inside the four-hour window still resolves.
///
/// Expected: Ok(Some(AccountLink))
#[tokio::test]
async fn accepts_token_near_window_edge() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .token("edge-token")
        .issued_at(Utc::now() - Duration::hours(3) - Duration::minutes(59))
        .build()
        .await?;

    let link = repo.find_by_token("edge-token").await?;

    assert!(link.is_some());

    Ok(())
}

/// Tests that a token older than the four-hour window does not resolve.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_token_past_window() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .token("stale-token")
        .issued_at(Utc::now() - Duration::hours(4) - Duration::minutes(1))
        .build()
        .await?;

    let link = repo.find_by_token("stale-token").await?;

    assert!(link.is_none());

    Ok(())
}

/// Tests resolving a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let link = repo.find_by_token("never-issued").await?;

    assert!(link.is_none());

    Ok(())
}

/// Tests that a duplicated token resolves to the newest issue.
///
/// Expected: Ok(Some(AccountLink)) carrying the later timestamp
#[tokio::test]
async fn resolves_newest_record_for_duplicate_token() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .ckey("oldissue")
        .token("dup-token")
        .issued_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = AccountLinkFactory::new(&db)
        .ckey("newissue")
        .token("dup-token")
        .issued_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let link = repo.find_by_token("dup-token").await?;

    assert_eq!(link.unwrap().id, newer.id);

    Ok(())
}

/// Tests that a consumed token inside its window still resolves.
///
/// A record that already carries a discord id is not filtered out, which
/// allows re-running verification against the same row.
///
/// Expected: Ok(Some(AccountLink)) with the existing discord id
#[tokio::test]
async fn resolves_consumed_token_inside_window() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    AccountLinkFactory::new(&db)
        .token("consumed-token")
        .discord_id(42)
        .valid(true)
        .build()
        .await?;

    let link = repo.find_by_token("consumed-token").await?;

    assert!(link.is_some());
    assert_eq!(link.unwrap().discord_id, Some(42));

    Ok(())
}
