use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Game already ended, start a new game to keep playing")]
    TerminalStateViolation,
}

pub type Result<T> = core::result::Result<T, GameError>;
