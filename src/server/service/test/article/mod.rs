use crate::{
    model::article::SearchType,
    server::{
        error::AppError,
        model::{
            article::{CreateArticleParam, UpdateArticleParam},
            audit::Actor,
            page::PageRequest,
        },
        service::article::ArticleService,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_article;
mod save_article;

fn actor() -> Actor {
    Actor::new("uno").unwrap()
}
