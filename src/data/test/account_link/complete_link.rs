use super::*;

/// Tests completing a pending link with a fresh token.
///
/// Expected: Ok(1), and the row carries the discord id and valid flag
#[tokio::test]
async fn completes_pending_link() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let pending = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .token("fresh-token")
        .build()
        .await?;

    let rows = repo.complete_link("fresh-token", 42).await?;

    assert_eq!(rows, 1);
    let row = reload(&db, pending.id).await;
    assert_eq!(row.discord_id, Some(42));
    assert!(row.valid);

    Ok(())
}

/// Tests that an expired token completes nothing and mutates nothing.
///
/// Expected: Ok(0), row unchanged
#[tokio::test]
async fn expired_token_updates_nothing() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let stale = AccountLinkFactory::new(&db)
        .token("stale-token")
        .issued_at(Utc::now() - Duration::hours(5))
        .build()
        .await?;

    let rows = repo.complete_link("stale-token", 42).await?;

    assert_eq!(rows, 0);
    let row = reload(&db, stale.id).await;
    assert_eq!(row.discord_id, None);
    assert!(!row.valid);

    Ok(())
}

/// Tests that an unknown token completes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_token_updates_nothing() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let rows = repo.complete_link("never-issued", 42).await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that completing a newer token demotes the ckey's earlier link.
///
/// Two tokens issued for the same ckey and completed in turn must leave
/// only the latest completion valid.
///
/// Expected: one valid row per ckey after each completion
#[tokio::test]
async fn demotes_prior_valid_links_for_ckey() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let first = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .token("token-a")
        .issued_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let second = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .token("token-b")
        .build()
        .await?;

    repo.complete_link("token-a", 42).await?;
    assert!(reload(&db, first.id).await.valid);

    repo.complete_link("token-b", 43).await?;

    let first_row = reload(&db, first.id).await;
    let second_row = reload(&db, second.id).await;
    assert!(!first_row.valid);
    assert!(second_row.valid);
    assert_eq!(second_row.discord_id, Some(43));

    Ok(())
}

/// Tests that completing a token demotes the caller's previous link.
///
/// A user moving to a new ckey keeps at most one valid record.
///
/// Expected: old row invalid, new row valid for the same discord id
#[tokio::test]
async fn demotes_callers_previous_link() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let old = AccountLinkFactory::new(&db)
        .ckey("shadowkoala")
        .discord_id(42)
        .valid(true)
        .issued_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let replacement = AccountLinkFactory::new(&db)
        .ckey("spacelizard")
        .token("new-ckey-token")
        .build()
        .await?;

    let rows = repo.complete_link("new-ckey-token", 42).await?;

    assert_eq!(rows, 1);
    assert!(!reload(&db, old.id).await.valid);
    let row = reload(&db, replacement.id).await;
    assert!(row.valid);
    assert_eq!(row.discord_id, Some(42));

    Ok(())
}

/// Tests re-completing a consumed token inside its window.
///
/// The second caller takes over the same row rather than being rejected.
///
/// Expected: Ok(1), row now linked to the second discord id
#[tokio::test]
async fn relinks_consumed_token_inside_window() -> TestResult {
    let db = link_db().await;
    let gateway = QueryGateway::new(db.clone());
    let repo = AccountLinkRepository::new(&gateway);

    let consumed = AccountLinkFactory::new(&db)
        .token("consumed-token")
        .discord_id(42)
        .valid(true)
        .build()
        .await?;

    let rows = repo.complete_link("consumed-token", 43).await?;

    assert_eq!(rows, 1);
    let row = reload(&db, consumed.id).await;
    assert_eq!(row.discord_id, Some(43));
    assert!(row.valid);

    Ok(())
}
