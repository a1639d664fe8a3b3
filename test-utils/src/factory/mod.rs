//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::create_user_account(&db).await?;
//! let article = factory::create_article(&db, account.id).await?;
//! let comment = factory::create_article_comment(&db, article.id).await?;
//!
//! let (account, article, comments) =
//!     factory::helpers::create_article_with_comments(&db, 2).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, account.id)
//!     .title("title")
//!     .hashtag(Some("#spring"))
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod article_comment;
pub mod helpers;
pub mod user_account;

pub use article::create_article;
pub use article_comment::create_article_comment;
pub use user_account::create_user_account;
