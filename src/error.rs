use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Invalid hand notation: {0}")]
    InvalidHandNotation(String),

    #[error("Board must have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardSize(usize),

    #[error("Duplicate card on board: {0}")]
    DuplicateBoardCard(String),

    #[error("Combo cards must differ, got {0} twice")]
    IdenticalComboCards(String),

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type RangeResult<T> = Result<T, RangeError>;
