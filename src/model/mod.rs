//! Transfer objects exchanged with HTTP clients.

pub mod api;
pub mod article;
pub mod article_comment;
pub mod user_account;
