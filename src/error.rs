use thiserror::Error;

use crate::maze::MIN_SIDE;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Error, Debug)]
pub enum MazeError {
    /// Requested maze is too small to hold an entrance, an exit and a passage between them.
    #[error("both the height and the width of the maze must be at least {min}, got {height}x{width}", min = MIN_SIDE)]
    InvalidDimensions { height: usize, width: usize },
    /// The serialized maze could not be parsed. The reason is kept for diagnostics only.
    #[error("cannot load the maze, it has an invalid format: {0}")]
    InvalidFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
