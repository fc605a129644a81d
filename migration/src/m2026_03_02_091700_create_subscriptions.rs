//! Migration to create the subscriptions table.
//!
//! A row records one conversation's interest in a (repo, branch) pair along
//! with the credential identifier used for API calls about it.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Subscriptions::ConvId).text().not_null())
                    .col(ColumnDef::new(Subscriptions::Repo).text().not_null())
                    .col(ColumnDef::new(Subscriptions::Branch).text().not_null())
                    .col(
                        ColumnDef::new(Subscriptions::OauthIdentifier)
                            .text()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_subscriptions")
                            .col(Subscriptions::ConvId)
                            .col(Subscriptions::Repo)
                            .col(Subscriptions::Branch),
                    )
                    .to_owned(),
            )
            .await?;

        // Push fan-out looks subscriptions up by (repo, branch).
        manager
            .create_index(
                Index::create()
                    .name("idx_subscriptions_repo_branch")
                    .table(Subscriptions::Table)
                    .col(Subscriptions::Repo)
                    .col(Subscriptions::Branch)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subscriptions_repo_branch")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    ConvId,
    Repo,
    Branch,
    OauthIdentifier,
}
