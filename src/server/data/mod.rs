//! Database repository layer for the board entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity. Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Every repository borrows any
//! `ConnectionTrait`, so services can run them against the pool or inside a transaction.

pub mod article;
pub mod article_comment;
pub mod user_account;
