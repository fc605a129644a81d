//! Subscription entity model
//!
//! One conversation's interest in a (repo, branch) pair. Conversation IDs
//! are opaque tokens supplied by the chat transport.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conv_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub repo: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub branch: String,

    /// Credential used for API calls about this subscription;
    /// last-writer-wins on re-subscribe
    pub oauth_identifier: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
