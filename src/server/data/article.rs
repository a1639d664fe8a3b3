//! Article data repository for database operations.
//!
//! This module provides the `ArticleRepository` for creating, querying, partially updating
//! and deleting articles. Reads always load the author alongside the article, since every
//! article has exactly one.

use chrono::Utc;
use sea_orm::{
    sea_query::{LikeExpr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    article::{Article, ArticleFilter, ArticleWithComments, CreateArticleParam, UpdateArticleParam},
    article_comment::ArticleComment,
    audit::Actor,
    page::PageRequest,
};

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `ArticleRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new article stamped with the acting user.
    ///
    /// Always an insert; nothing is merged with existing rows.
    ///
    /// # Arguments
    /// - `param` - Article fields including the author's account id
    /// - `actor` - User recorded in the audit columns
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article with its author
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown author
    pub async fn create(&self, param: CreateArticleParam, actor: &Actor) -> Result<Article, DbErr> {
        let now = Utc::now();

        let article = entity::article::ActiveModel {
            user_account_id: ActiveValue::Set(param.user_account_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            hashtag: ActiveValue::Set(param.hashtag),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(actor.username().to_string()),
            modified_at: ActiveValue::Set(now),
            modified_by: ActiveValue::Set(actor.username().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(article).await
    }

    /// Finds an article and its author by article id.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let result = entity::prelude::Article::find_by_id(id)
            .find_also_related(entity::prelude::UserAccount)
            .one(self.db)
            .await?;

        result
            .map(|(article, author)| into_article(article, author))
            .transpose()
    }

    /// Finds an article with its author and all of its comments in insertion order.
    ///
    /// # Returns
    /// - `Ok(Some(ArticleWithComments))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_comments(&self, id: i32) -> Result<Option<ArticleWithComments>, DbErr> {
        let Some(article) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let comments = entity::prelude::ArticleComment::find()
            .filter(entity::article_comment::Column::ArticleId.eq(id))
            .order_by_asc(entity::article_comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ArticleComment::from_entity)
            .collect();

        Ok(Some(ArticleWithComments { article, comments }))
    }

    /// Checks whether an article with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of articles, newest first, optionally restricted by a field filter.
    ///
    /// A page whose offset exceeds what SQL can address is returned empty, like any other
    /// page past the end.
    ///
    /// # Arguments
    /// - `filter` - Field-specific query, or `None` for all articles
    /// - `page` - Zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok((articles, total))` - Articles on the page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: Option<&ArticleFilter>,
        page: PageRequest,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let query = match filter {
            Some(filter) => apply_filter(entity::prelude::Article::find(), filter),
            None => entity::prelude::Article::find(),
        };

        let paginator = query
            .find_also_related(entity::prelude::UserAccount)
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        if page.offset().is_none() {
            return Ok((Vec::new(), total));
        }

        let articles = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(|(article, author)| into_article(article, author))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total))
    }

    /// Overwrites the present fields of an article and stamps the modification.
    ///
    /// # Arguments
    /// - `param` - Target id and the fields to overwrite; `None` fields are left untouched
    /// - `actor` - User recorded as the modifier
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(DbErr::RecordNotFound)` - No article with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, param: UpdateArticleParam, actor: &Actor) -> Result<Article, DbErr> {
        let article = entity::prelude::Article::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::article::ActiveModel = article.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(hashtag) = param.hashtag {
            active_model.hashtag = ActiveValue::Set(Some(hashtag));
        }
        active_model.modified_at = ActiveValue::Set(Utc::now());
        active_model.modified_by = ActiveValue::Set(actor.username().to_string());

        let updated = active_model.update(self.db).await?;

        self.with_author(updated).await
    }

    /// Deletes an article row by id, returning the number of rows removed.
    ///
    /// Comments are not touched; callers remove them first.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all articles
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Article::find().count(self.db).await
    }

    async fn with_author(&self, article: entity::article::Model) -> Result<Article, DbErr> {
        let author = entity::prelude::UserAccount::find_by_id(article.user_account_id)
            .one(self.db)
            .await?;

        into_article(article, author)
    }
}

fn into_article(
    article: entity::article::Model,
    author: Option<entity::user_account::Model>,
) -> Result<Article, DbErr> {
    let author = author.ok_or(DbErr::RecordNotFound(format!(
        "Author {} of article {} not found",
        article.user_account_id, article.id
    )))?;

    Ok(Article::from_entity(article, author))
}

/// Builds a `LIKE` pattern matching `keyword` anywhere in the column, with `%`, `_` and
/// `\` in the keyword matched literally.
fn contains_pattern(keyword: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn apply_filter(
    query: Select<entity::article::Entity>,
    filter: &ArticleFilter,
) -> Select<entity::article::Entity> {
    use entity::{article, user_account};

    match filter {
        ArticleFilter::TitleContains(keyword) => {
            query.filter(article::Column::Title.like(contains_pattern(keyword)))
        }
        ArticleFilter::ContentContains(keyword) => {
            query.filter(article::Column::Content.like(contains_pattern(keyword)))
        }
        ArticleFilter::UsernameContains(keyword) => query.filter(
            article::Column::UserAccountId.in_subquery(
                Query::select()
                    .column(user_account::Column::Id)
                    .from(user_account::Entity)
                    .and_where(user_account::Column::Username.like(contains_pattern(keyword)))
                    .to_owned(),
            ),
        ),
        ArticleFilter::NicknameContains(keyword) => query.filter(
            article::Column::UserAccountId.in_subquery(
                Query::select()
                    .column(user_account::Column::Id)
                    .from(user_account::Entity)
                    .and_where(user_account::Column::Nickname.like(contains_pattern(keyword)))
                    .to_owned(),
            ),
        ),
        ArticleFilter::HashtagEquals(keyword) => {
            query.filter(article::Column::Hashtag.eq(keyword.as_str()))
        }
    }
}
