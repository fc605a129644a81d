//! Notified-branch entity model
//!
//! A delivery receipt: conversation conv_id has already been told about
//! activity on (repo, branch). Rows are append-only and never updated.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notified_branches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conv_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub repo: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub branch: String,

    pub ctime: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
