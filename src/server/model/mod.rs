//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! board entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod article;
pub mod article_comment;
pub mod audit;
pub mod page;
pub mod user_account;
