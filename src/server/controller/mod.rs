pub mod article;
pub mod article_comment;
pub mod user_account;
