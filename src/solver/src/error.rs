use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The character does not continue any dictionary word from this node.
    #[error("no dictionary word continues with '{0}'")]
    NoSuchPrefix(char),

    #[error("board needs {expected} letters, got {actual}")]
    InvalidBoardSize { expected: usize, actual: usize },

    #[error("no reward defined for words of length {0}")]
    UnscoredLength(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
