use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum MoveParseError {
    #[error("Empty move")]
    Empty,

    #[error("Invalid move character '{0}', expected one of R, P, S")]
    InvalidChar(char),

    #[error("Invalid move name '{0}'")]
    InvalidName(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Reference cycle must contain at least one move")]
    EmptyReferenceCycle,

    #[error("Reference cycle of {len} moves does not fit the detection window of {window} moves")]
    ReferenceCycleTooLong { len: usize, window: usize },

    #[error("Invalid agent config JSON")]
    Json(#[from] serde_json::Error),
}
