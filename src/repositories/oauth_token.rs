//! Credential store for database operations
//!
//! OAuth tokens keyed by the identifier derived from an account's natural
//! key. The store holds the token verbatim; refresh and consent belong to
//! the OAuth flow collaborator.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::error::Result;
use crate::models::TokenResponse;
use crate::models::oauth_token::{self, Entity as OAuthToken};

/// Repository for credential store operations
pub struct OAuthTokenRepository {
    db: Arc<DatabaseConnection>,
}

impl OAuthTokenRepository {
    /// Create a new credential store repository
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Fetches the live credential for an identifier; absent is `Ok(None)`.
    pub async fn get(&self, identifier: &str) -> Result<Option<oauth_token::Model>> {
        let token = OAuthToken::find_by_id(identifier.to_string())
            .one(&*self.db)
            .await?;

        Ok(token)
    }

    /// Upserts the credential for an identifier.
    ///
    /// On conflict only `access_token` and `mtime` are overwritten; `ctime`
    /// keeps the original creation time.
    pub async fn put(&self, identifier: &str, token: &TokenResponse) -> Result<()> {
        let now = Utc::now();
        let row = oauth_token::ActiveModel {
            identifier: Set(identifier.to_string()),
            access_token: Set(token.access_token.clone()),
            token_type: Set(token.token_type.clone()),
            ctime: Set(now),
            mtime: Set(now),
        };

        OAuthToken::insert(row)
            .on_conflict(
                OnConflict::column(oauth_token::Column::Identifier)
                    .update_columns([
                        oauth_token::Column::AccessToken,
                        oauth_token::Column::Mtime,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }

    /// Deletes the credential; returns rows affected (0 when absent is a
    /// no-op, not an error).
    pub async fn delete(&self, identifier: &str) -> Result<u64> {
        let result = OAuthToken::delete_many()
            .filter(oauth_token::Column::Identifier.eq(identifier))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
