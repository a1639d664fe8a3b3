//! SeaORM entities for the board schema.

pub mod prelude;

pub mod article;
pub mod article_comment;
pub mod user_account;
