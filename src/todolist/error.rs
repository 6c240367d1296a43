use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Range(String),

    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Please provide a command. Use --help to see available commands")]
    MissingCommand,
}

pub type Result<T> = std::result::Result<T, TodoError>;
