//! OAuth token entity model
//!
//! Stores the live credential backing an account, keyed by the identifier
//! derived from the account's natural key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "oauth_tokens")]
pub struct Model {
    /// Identifier derived from (username, nickname); never independently
    /// assigned
    #[sea_orm(primary_key, auto_increment = false)]
    pub identifier: String,

    pub access_token: String,

    pub token_type: String,

    /// Creation time; preserved across upserts
    pub ctime: DateTimeUtc,

    /// Last-modified time; refreshed on every upsert
    pub mtime: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
