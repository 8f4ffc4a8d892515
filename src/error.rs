use crate::config::ConfigError;

/// Failures that can stop the game binary.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
