use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string_len(User::Provider, 20))
                    .col(string(User::ProviderId))
                    .col(string(User::Avatar))
                    .col(text(User::Bio))
                    .col(string_len(User::Role, 20).default("user"))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One account per identity at a given provider
        manager
            .create_index(
                Index::create()
                    .name("idx_user_provider_identity")
                    .table(User::Table)
                    .col(User::Provider)
                    .col(User::ProviderId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Provider,
    ProviderId,
    Avatar,
    Bio,
    Role,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
