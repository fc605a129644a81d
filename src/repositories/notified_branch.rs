//! Notification dedup ledger
//!
//! Records which conversations were already told about a branch and
//! computes the set still owed a notification for a push. A conversation
//! holding any receipt for a repo is suppressed for that repo's other
//! branches until those branches gain receipts of their own.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::error::Result;
use crate::models::notified_branch::{self, Entity as NotifiedBranch};
use crate::models::subscription::{self, Entity as Subscription};

/// Repository for the per-conversation delivery ledger
pub struct NotifiedBranchRepository {
    db: Arc<DatabaseConnection>,
}

impl NotifiedBranchRepository {
    /// Create a new dedup ledger repository
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Computes the conversations that should be notified right now for a
    /// push to `repo`/`branch`.
    ///
    /// Kept as a set difference over separate queries so each exclusion
    /// stays independently testable: subscribers of the exact pair, minus
    /// conversations already holding a receipt for this pair, minus
    /// conversations holding a receipt for any other branch of the same
    /// repo.
    ///
    /// Callers deliver and then advance the ledger with
    /// [`Self::record_notified`] per conversation. A crash between the two
    /// re-notifies on retry; delivery is at-least-once.
    pub async fn conversations_owed_notification(
        &self,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<String>> {
        let subscribed: Vec<String> = Subscription::find()
            .filter(subscription::Column::Repo.eq(repo))
            .filter(subscription::Column::Branch.eq(branch))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|s| s.conv_id)
            .collect();

        let notified_this_pair: HashSet<String> = NotifiedBranch::find()
            .filter(notified_branch::Column::Repo.eq(repo))
            .filter(notified_branch::Column::Branch.eq(branch))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|n| n.conv_id)
            .collect();

        let notified_other_branch: HashSet<String> = NotifiedBranch::find()
            .filter(notified_branch::Column::Repo.eq(repo))
            .filter(notified_branch::Column::Branch.ne(branch))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|n| n.conv_id)
            .collect();

        let owed: Vec<String> = subscribed
            .into_iter()
            .filter(|conv_id| {
                !notified_this_pair.contains(conv_id) && !notified_other_branch.contains(conv_id)
            })
            .collect();

        debug!(
            repo,
            branch,
            owed = owed.len(),
            "computed conversations owed a notification"
        );

        Ok(owed)
    }

    /// Records that a conversation was told about (repo, branch).
    ///
    /// Receipts are append-only; re-recording the same triple surfaces
    /// [`crate::error::StoreError::Conflict`] and leaves the delivery
    /// counter untouched.
    pub async fn record_notified(&self, conv_id: &str, repo: &str, branch: &str) -> Result<()> {
        let row = notified_branch::ActiveModel {
            conv_id: Set(conv_id.to_string()),
            repo: Set(repo.to_string()),
            branch: Set(branch.to_string()),
            ctime: Set(Utc::now()),
        };

        NotifiedBranch::insert(row)
            .exec_without_returning(&*self.db)
            .await?;

        counter!("notified_branches_recorded_total").increment(1);

        Ok(())
    }
}
