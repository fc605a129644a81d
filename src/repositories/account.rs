//! Account registry for database operations
//!
//! Tracks which named OAuth-linked identities a user has configured,
//! independent of any single conversation.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;

use crate::error::{Result, StoreError};
use crate::identity::account_identifier;
use crate::models::account::{self, Entity as Account};
use crate::models::oauth_token::{self, Entity as OAuthToken};

/// Repository for account registry operations
#[derive(Debug, Clone)]
pub struct AccountRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists the nicknames a user has configured, sorted ascending.
    /// A user with no accounts gets an empty vec, not an error.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<String>> {
        let accounts = Account::find()
            .filter(account::Column::Username.eq(username))
            .order_by_asc(account::Column::Nickname)
            .all(&*self.db)
            .await?;

        Ok(accounts.into_iter().map(|a| a.nickname).collect())
    }

    pub async fn exists(&self, username: &str, nickname: &str) -> Result<bool> {
        let found = Account::find()
            .filter(account::Column::Username.eq(username))
            .filter(account::Column::Nickname.eq(nickname))
            .one(&*self.db)
            .await?;

        Ok(found.is_some())
    }

    /// Creates an account. An existing (username, nickname) pair surfaces
    /// [`StoreError::Conflict`].
    pub async fn create(&self, username: &str, nickname: &str) -> Result<()> {
        let row = account::ActiveModel {
            username: Set(username.to_string()),
            nickname: Set(nickname.to_string()),
        };

        Account::insert(row)
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }

    /// Deletes the account together with its stored credential.
    ///
    /// Both deletes run in one transaction. If the account delete does not
    /// affect exactly one row, nothing is committed and
    /// [`StoreError::InvariantViolation`] is returned.
    pub async fn delete(&self, username: &str, nickname: &str) -> Result<()> {
        let identifier = account_identifier(username, nickname);

        let txn = self.db.begin().await?;

        OAuthToken::delete_many()
            .filter(oauth_token::Column::Identifier.eq(&identifier))
            .exec(&txn)
            .await?;

        let affected = Account::delete_many()
            .filter(account::Column::Username.eq(username))
            .filter(account::Column::Nickname.eq(nickname))
            .exec(&txn)
            .await?
            .rows_affected;

        if affected != 1 {
            error!(
                username,
                nickname, affected, "account delete did not affect exactly one row"
            );
            txn.rollback().await?;
            return Err(StoreError::InvariantViolation { affected });
        }

        txn.commit().await?;

        Ok(())
    }
}
