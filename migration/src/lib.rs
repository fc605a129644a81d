//! Database migrations for branchwire.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2026_03_02_091500_create_accounts;
mod m2026_03_02_091600_create_oauth_tokens;
mod m2026_03_02_091700_create_subscriptions;
mod m2026_03_02_091800_create_notified_branches;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_03_02_091500_create_accounts::Migration),
            Box::new(m2026_03_02_091600_create_oauth_tokens::Migration),
            Box::new(m2026_03_02_091700_create_subscriptions::Migration),
            Box::new(m2026_03_02_091800_create_notified_branches::Migration),
        ]
    }
}
