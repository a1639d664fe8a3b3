use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAccount::Id))
                    .col(string_uniq(UserAccount::Username))
                    .col(string(UserAccount::Password))
                    .col(string_null(UserAccount::Email))
                    .col(string_null(UserAccount::Nickname))
                    .col(text_null(UserAccount::Memo))
                    .col(
                        timestamp(UserAccount::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(UserAccount::CreatedBy))
                    .col(
                        timestamp(UserAccount::ModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(UserAccount::ModifiedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAccount {
    Table,
    Id,
    Username,
    Password,
    Email,
    Nickname,
    Memo,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}
