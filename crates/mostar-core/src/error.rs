use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoScriptError {
    #[error("MoScript \"{0}\" is not registered")]
    NotRegistered(String),

    #[error("invalid inputs: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Logic(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MoScriptError>;
