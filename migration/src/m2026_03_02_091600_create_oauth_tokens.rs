//! Migration to create the oauth_tokens table.
//!
//! Stores one live OAuth credential per derived account identifier. Upserts
//! refresh mtime while ctime keeps the original creation time.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OauthTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OauthTokens::Identifier)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OauthTokens::AccessToken).text().not_null())
                    .col(ColumnDef::new(OauthTokens::TokenType).text().not_null())
                    .col(
                        ColumnDef::new(OauthTokens::Ctime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(OauthTokens::Mtime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OauthTokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OauthTokens {
    Table,
    Identifier,
    AccessToken,
    TokenType,
    Ctime,
    Mtime,
}
