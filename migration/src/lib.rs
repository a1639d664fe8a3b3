pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_user_account_table;
mod m20251016_000002_create_article_table;
mod m20251016_000003_create_article_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_create_user_account_table::Migration),
            Box::new(m20251016_000002_create_article_table::Migration),
            Box::new(m20251016_000003_create_article_comment_table::Migration),
        ]
    }
}
