//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Orchestration**: Coordinating repository calls for one operation
//! - **Error Policy**: Deciding which missing records surface as errors and which are
//!   logged and skipped
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes in one transaction

pub mod article;
pub mod article_comment;
pub mod user_account;
