use thiserror::Error;

use crate::types::SIZE;

/// Malformed configuration text. No partial board is left accessible when
/// one of these surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("configuration text is empty")]
    Empty,
    #[error("expected {SIZE} rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected {SIZE} values, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}: `{token}` is not a tile value")]
    Token { row: usize, token: String },
}

/// Structurally well-formed configuration with broken tile contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("tile value {0} is outside 1..=15")]
    ValueOutOfRange(u8),
    #[error("tile value {0} appears more than once")]
    Duplicate(u8),
}

/// A tile access or move that falls outside the 4x4 grid. Recoverable; the
/// board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position ({row}, {col}) is outside the board")]
pub struct PositionOutOfBoard {
    pub row: isize,
    pub col: isize,
}

/// Everything that can go wrong while turning a configuration into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Invalid(#[from] InvalidConfiguration),
}

/// Session-level failures. Only `Config` and `Unsolvable` abort a load;
/// the rest are per-operation and leave the session in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    OutOfBoard(#[from] PositionOutOfBoard),
    #[error("no configuration at index {index} (catalog holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("configuration cannot reach the solved arrangement")]
    Unsolvable,
    #[error("no puzzle is active")]
    NoActivePuzzle,
    #[error("no move to undo")]
    AtHistoryStart,
    #[error("no move to redo")]
    AtHistoryEnd,
}
