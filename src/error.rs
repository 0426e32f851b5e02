use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spritegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(spritegen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(spritegen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown sprite: {name}")]
    #[diagnostic(code(spritegen::catalog))]
    UnknownSprite {
        name: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
