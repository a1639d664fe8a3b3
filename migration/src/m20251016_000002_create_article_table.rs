use sea_orm_migration::{prelude::*, schema::*};

use super::m20251016_000001_create_user_account_table::UserAccount;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::UserAccountId))
                    .col(string(Article::Title))
                    .col(text(Article::Content))
                    .col(string_null(Article::Hashtag))
                    .col(
                        timestamp(Article::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Article::CreatedBy))
                    .col(
                        timestamp(Article::ModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Article::ModifiedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_user_account_id")
                            .from(Article::Table, Article::UserAccountId)
                            .to(UserAccount::Table, UserAccount::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_article_title", Article::Title),
            ("idx_article_hashtag", Article::Hashtag),
            ("idx_article_created_at", Article::CreatedAt),
            ("idx_article_created_by", Article::CreatedBy),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Article::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    UserAccountId,
    Title,
    Content,
    Hashtag,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}
