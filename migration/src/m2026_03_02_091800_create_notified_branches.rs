//! Migration to create the notified_branches table.
//!
//! Delivery receipts, one per (conv_id, repo, branch). Rows are append-only;
//! the primary key rejects duplicate receipts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotifiedBranches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NotifiedBranches::ConvId).text().not_null())
                    .col(ColumnDef::new(NotifiedBranches::Repo).text().not_null())
                    .col(ColumnDef::new(NotifiedBranches::Branch).text().not_null())
                    .col(
                        ColumnDef::new(NotifiedBranches::Ctime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_notified_branches")
                            .col(NotifiedBranches::ConvId)
                            .col(NotifiedBranches::Repo)
                            .col(NotifiedBranches::Branch),
                    )
                    .to_owned(),
            )
            .await?;

        // The dedup queries scan receipts for a whole repo.
        manager
            .create_index(
                Index::create()
                    .name("idx_notified_branches_repo")
                    .table(NotifiedBranches::Table)
                    .col(NotifiedBranches::Repo)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_notified_branches_repo").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(NotifiedBranches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NotifiedBranches {
    Table,
    ConvId,
    Repo,
    Branch,
    Ctime,
}
