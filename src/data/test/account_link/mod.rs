use chrono::{Duration, Utc};
use entity::prelude::AccountLink;
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory::account_link::AccountLinkFactory};

use crate::data::AccountLinkRepository;
use crate::db::QueryGateway;

mod all_by_ckey;
mod complete_link;
mod find_by_ckey;
mod find_by_token;
mod invalidate_by_discord_id;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Creates an in-memory database with the link table.
async fn link_db() -> DatabaseConnection {
    let test = TestBuilder::new()
        .with_table(AccountLink)
        .build()
        .await
        .unwrap();
    test.db.unwrap()
}

/// Reloads a link row directly from the database, bypassing the repository.
async fn reload(db: &DatabaseConnection, id: i32) -> entity::account_link::Model {
    AccountLink::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .expect("link row should exist")
}
