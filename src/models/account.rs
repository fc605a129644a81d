//! Account entity model
//!
//! A row names an OAuth-linked identity a user has configured; the
//! (username, nickname) pair is the natural key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Owning chat-service username
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,

    /// User-chosen label, unique per user
    #[sea_orm(primary_key, auto_increment = false)]
    pub nickname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
