use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown transition model: {0}")]
    UnknownTransitionModel(String),

    #[error("Malformed board token {token:?} at row {row}, column {col}")]
    MalformedToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("Board has no cells")]
    EmptyBoard,

    #[error("Board row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Discount factor must be in (0, 1], got {0}")]
    InvalidDiscount(f64),

    #[error("Cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse scenario: {0}")]
    Json(#[from] serde_json::Error),
}
