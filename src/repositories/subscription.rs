//! Subscription registry for database operations
//!
//! Conversation interest in (repo, branch) pairs. The credential identifier
//! attached to a pair is last-writer-wins; subscriber history is never lost
//! by re-linking.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::error::Result;
use crate::models::subscription::{self, Entity as Subscription};

/// Repository for subscription registry operations
#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl SubscriptionRepository {
    /// Creates a new SubscriptionRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Upserts a subscription keyed on (conv_id, repo, branch).
    ///
    /// Re-subscribing an existing triple replaces only the credential
    /// identifier.
    pub async fn subscribe(
        &self,
        conv_id: &str,
        repo: &str,
        branch: &str,
        oauth_identifier: &str,
    ) -> Result<()> {
        let row = subscription::ActiveModel {
            conv_id: Set(conv_id.to_string()),
            repo: Set(repo.to_string()),
            branch: Set(branch.to_string()),
            oauth_identifier: Set(oauth_identifier.to_string()),
        };

        Subscription::insert(row)
            .on_conflict(
                OnConflict::columns([
                    subscription::Column::ConvId,
                    subscription::Column::Repo,
                    subscription::Column::Branch,
                ])
                .update_column(subscription::Column::OauthIdentifier)
                .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }

    /// Deletes exactly the matching row; returns rows affected (0 = no-op).
    pub async fn unsubscribe(&self, conv_id: &str, repo: &str, branch: &str) -> Result<u64> {
        let result = Subscription::delete_many()
            .filter(subscription::Column::ConvId.eq(conv_id))
            .filter(subscription::Column::Repo.eq(repo))
            .filter(subscription::Column::Branch.eq(branch))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every branch of a repo for the conversation; returns rows
    /// affected.
    pub async fn unsubscribe_repo(&self, conv_id: &str, repo: &str) -> Result<u64> {
        let result = Subscription::delete_many()
            .filter(subscription::Column::ConvId.eq(conv_id))
            .filter(subscription::Column::Repo.eq(repo))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Distinct conversations subscribed to this exact pair. Order is not
    /// significant to callers.
    pub async fn subscribers_of(&self, repo: &str, branch: &str) -> Result<Vec<String>> {
        let rows = Subscription::find()
            .filter(subscription::Column::Repo.eq(repo))
            .filter(subscription::Column::Branch.eq(branch))
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(|s| s.conv_id).collect())
    }

    /// Exact-branch existence probe.
    pub async fn exists(&self, conv_id: &str, repo: &str, branch: &str) -> Result<bool> {
        let count = Subscription::find()
            .filter(subscription::Column::ConvId.eq(conv_id))
            .filter(subscription::Column::Repo.eq(repo))
            .filter(subscription::Column::Branch.eq(branch))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }

    /// Any-branch existence probe.
    pub async fn repo_exists(&self, conv_id: &str, repo: &str) -> Result<bool> {
        let count = Subscription::find()
            .filter(subscription::Column::ConvId.eq(conv_id))
            .filter(subscription::Column::Repo.eq(repo))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }

    /// Full subscription list for a conversation, sorted by repo; used to
    /// render the conversation's subscription list.
    pub async fn list_for_conversation(&self, conv_id: &str) -> Result<Vec<subscription::Model>> {
        let rows = Subscription::find()
            .filter(subscription::Column::ConvId.eq(conv_id))
            .order_by_asc(subscription::Column::Repo)
            .order_by_asc(subscription::Column::Branch)
            .all(&*self.db)
            .await?;

        Ok(rows)
    }
}
