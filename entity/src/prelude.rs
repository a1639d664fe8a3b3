pub use super::article::Entity as Article;
pub use super::article_comment::Entity as ArticleComment;
pub use super::user_account::Entity as UserAccount;
