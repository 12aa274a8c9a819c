use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Direction token not recognized")]
    InvalidDirection,
    #[error("Cannot move that way, target is blocked or out of bounds")]
    IllegalMove,
    #[error("Layout table references a coordinate outside the grid")]
    InvalidCoords,
    #[error("Start or goal cell is not open")]
    BlockedEndpoint,
}

pub type Result<T> = core::result::Result<T, MazeError>;
