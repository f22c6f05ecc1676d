use std::path::PathBuf;

/// Reasons a drop can be rejected. The engine is never mutated when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("there is no move to undo")]
    NothingToUndo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors produced while parsing a headless command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("column numbers start at 1 (got {0})")]
    ColumnOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { width: 0, height: 6 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be non-zero (got 0x6)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
