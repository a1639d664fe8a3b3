use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    ///
    /// Only `DATABASE_URL` is required; it may also come from a `.env` file in the
    /// working directory.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
