//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Actor recorded in audit columns of factory-created rows.
pub const FACTORY_ACTOR: &str = "factory";

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique usernames and
/// titles across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an article with its author and `comment_count` comments.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `comment_count` - Number of comments to attach to the article
///
/// # Returns
/// - `Ok((account, article, comments))` - Created entities, comments in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_comments<C: ConnectionTrait>(
    db: &C,
    comment_count: usize,
) -> Result<
    (
        entity::user_account::Model,
        entity::article::Model,
        Vec<entity::article_comment::Model>,
    ),
    DbErr,
> {
    let account = crate::factory::user_account::create_user_account(db).await?;
    let article = crate::factory::article::create_article(db, account.id).await?;

    let mut comments = Vec::with_capacity(comment_count);
    for _ in 0..comment_count {
        comments.push(crate::factory::article_comment::create_article_comment(db, article.id).await?);
    }

    Ok((account, article, comments))
}
