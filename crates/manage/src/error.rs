/// User-facing failures of a management command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Missing required arguments")]
    MissingArguments,

    #[error("Invalid course UUID: {0:?}")]
    InvalidUuid(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
