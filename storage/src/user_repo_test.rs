//! Unit tests for UserRepository.
//!
//! Covers upsert/find round-trips, the updated_at stamping rule, and
//! attribute persistence.

use bot_core::{ConversationState, UserProfile};
use serde_json::json;

use crate::sqlite_pool::SqlitePoolManager;
use crate::user_repo::UserRepository;

async fn test_repo() -> UserRepository {
    let pool = SqlitePoolManager::new("sqlite::memory:")
        .await
        .expect("Failed to create pool");
    UserRepository::new(pool)
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let repo = test_repo().await;

    let found = repo.find_by_id("U-missing").await.expect("Failed to query");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_insert_then_find_round_trip() {
    let repo = test_repo().await;

    let mut user = UserProfile::new("U1");
    user.display_name = Some("Al".to_string());
    user.set_attribute("name", json!("Al"));

    repo.upsert(&user).await.expect("Failed to upsert");

    let found = repo
        .find_by_id("U1")
        .await
        .expect("Failed to query")
        .expect("User should exist");

    assert_eq!(found.user_id, "U1");
    assert_eq!(found.display_name.as_deref(), Some("Al"));
    assert_eq!(found.state, ConversationState::Initial);
    assert_eq!(found.attribute_text("name").as_deref(), Some("Al"));
}

#[tokio::test]
async fn test_first_insert_leaves_updated_at_unset() {
    let repo = test_repo().await;

    repo.upsert(&UserProfile::new("U1")).await.expect("Failed to upsert");

    let found = repo.find_by_id("U1").await.unwrap().unwrap();
    assert!(found.updated_at.is_none());
}

#[tokio::test]
async fn test_second_upsert_overwrites_and_stamps_updated_at() {
    let repo = test_repo().await;

    let mut user = UserProfile::new("U1");
    repo.upsert(&user).await.expect("Failed to upsert");

    user.state = ConversationState::WaitingName;
    user.set_attribute("name", json!("Al"));
    repo.upsert(&user).await.expect("Failed to upsert");

    let found = repo.find_by_id("U1").await.unwrap().unwrap();
    assert_eq!(found.state, ConversationState::WaitingName);
    assert_eq!(found.attribute_text("name").as_deref(), Some("Al"));
    assert!(found.updated_at.is_some());
}

#[tokio::test]
async fn test_file_backed_database_survives_reconnect() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("bot.db");
    let db_url = db_path.to_str().unwrap();

    {
        let pool = SqlitePoolManager::new(db_url)
            .await
            .expect("Failed to create pool");
        let repo = UserRepository::new(pool)
            .await
            .expect("Failed to create repository");
        let mut user = UserProfile::new("U1");
        user.state = ConversationState::Registered;
        repo.upsert(&user).await.expect("Failed to upsert");
    }

    // A fresh pool over the same file sees the row.
    let pool = SqlitePoolManager::new(db_url)
        .await
        .expect("Failed to reopen pool");
    let repo = UserRepository::new(pool)
        .await
        .expect("Failed to recreate repository");
    let found = repo.find_by_id("U1").await.unwrap().unwrap();
    assert_eq!(found.state, ConversationState::Registered);
}

#[tokio::test]
async fn test_upsert_keeps_single_row_per_user() {
    let repo = test_repo().await;

    let mut user = UserProfile::new("U1");
    repo.upsert(&user).await.expect("Failed to upsert");
    user.state = ConversationState::Registered;
    repo.upsert(&user).await.expect("Failed to upsert");

    // Re-reading returns the latest state; there is no second row to find.
    let found = repo.find_by_id("U1").await.unwrap().unwrap();
    assert_eq!(found.state, ConversationState::Registered);
}
