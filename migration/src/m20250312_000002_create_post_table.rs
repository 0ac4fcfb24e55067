use sea_orm_migration::{prelude::*, schema::*};

use super::m20250312_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string(Post::Title))
                    .col(string_uniq(Post::Slug))
                    .col(string(Post::Description))
                    .col(text(Post::RawContent))
                    .col(text(Post::HtmlContent))
                    .col(string_len(Post::Status, 20).default("draft"))
                    .col(json(Post::Tags))
                    .col(big_integer(Post::ViewCount).default(0))
                    .col(integer(Post::AuthorId))
                    .col(
                        timestamp_with_time_zone(Post::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Post::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Post::PublishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_author_id")
                            .from(Post::Table, Post::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Slug,
    Description,
    RawContent,
    HtmlContent,
    Status,
    Tags,
    ViewCount,
    AuthorId,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}
