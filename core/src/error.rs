use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Invalid painter configuration")]
    InvalidConfig,
    #[error("Snapshot could not be encoded or decoded")]
    InvalidSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;
