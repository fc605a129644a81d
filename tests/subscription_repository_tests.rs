//! Integration tests for the subscription registry.

use anyhow::Result;
use branchwire::repositories::SubscriptionRepository;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::setup_test_db_arc;

#[tokio::test]
async fn subscribe_then_exists() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    assert!(!repo.exists("conv-1", "acme/api", "main").await?);

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;

    assert!(repo.exists("conv-1", "acme/api", "main").await?);
    assert!(repo.repo_exists("conv-1", "acme/api").await?);
    Ok(())
}

#[tokio::test]
async fn exists_probes_distinguish_branch_from_repo_interest() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;

    assert!(!repo.exists("conv-1", "acme/api", "dev").await?);
    assert!(repo.repo_exists("conv-1", "acme/api").await?);
    assert!(!repo.repo_exists("conv-1", "acme/web").await?);
    Ok(())
}

#[tokio::test]
async fn resubscribe_replaces_credential_without_duplicating_rows() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;
    repo.subscribe("conv-1", "acme/api", "main", "alice:personal")
        .await?;

    let subs = repo.list_for_conversation("conv-1").await?;
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].oauth_identifier, "alice:personal");

    let subscribers = repo.subscribers_of("acme/api", "main").await?;
    assert_eq!(subscribers, vec!["conv-1"]);
    Ok(())
}

#[tokio::test]
async fn unsubscribe_removes_exact_row_only() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;
    repo.subscribe("conv-1", "acme/api", "dev", "alice:work")
        .await?;

    assert_eq!(repo.unsubscribe("conv-1", "acme/api", "main").await?, 1);
    assert!(!repo.exists("conv-1", "acme/api", "main").await?);
    assert!(repo.exists("conv-1", "acme/api", "dev").await?);

    // Absent row is a no-op, not an error.
    assert_eq!(repo.unsubscribe("conv-1", "acme/api", "main").await?, 0);
    Ok(())
}

#[tokio::test]
async fn unsubscribe_repo_removes_all_branches() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;
    repo.subscribe("conv-1", "acme/api", "dev", "alice:work")
        .await?;
    repo.subscribe("conv-1", "acme/web", "main", "alice:work")
        .await?;

    assert_eq!(repo.unsubscribe_repo("conv-1", "acme/api").await?, 2);
    assert!(!repo.repo_exists("conv-1", "acme/api").await?);
    assert!(repo.repo_exists("conv-1", "acme/web").await?);
    Ok(())
}

#[tokio::test]
async fn subscribers_of_returns_distinct_conversations() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;
    repo.subscribe("conv-2", "acme/api", "main", "bob:ci")
        .await?;
    repo.subscribe("conv-3", "acme/api", "dev", "carol:dev")
        .await?;

    let mut subscribers = repo.subscribers_of("acme/api", "main").await?;
    subscribers.sort();
    assert_eq!(subscribers, vec!["conv-1", "conv-2"]);
    Ok(())
}

#[tokio::test]
async fn list_for_conversation_is_sorted_by_repo() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = SubscriptionRepository::new(db.clone());

    repo.subscribe("conv-1", "zeta/tools", "main", "alice:work")
        .await?;
    repo.subscribe("conv-1", "acme/api", "main", "alice:work")
        .await?;

    let subs = repo.list_for_conversation("conv-1").await?;
    let repos: Vec<&str> = subs.iter().map(|s| s.repo.as_str()).collect();
    assert_eq!(repos, vec!["acme/api", "zeta/tools"]);
    Ok(())
}
