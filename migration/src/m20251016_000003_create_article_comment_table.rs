use sea_orm_migration::{prelude::*, schema::*};

use super::m20251016_000002_create_article_table::Article;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleComment::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleComment::Id))
                    .col(integer(ArticleComment::ArticleId))
                    .col(text(ArticleComment::Content))
                    .col(
                        timestamp(ArticleComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(ArticleComment::CreatedBy))
                    .col(
                        timestamp(ArticleComment::ModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(ArticleComment::ModifiedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_comment_article_id")
                            .from(ArticleComment::Table, ArticleComment::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_comment_article_id")
                    .table(ArticleComment::Table)
                    .col(ArticleComment::ArticleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleComment {
    Table,
    Id,
    ArticleId,
    Content,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}
