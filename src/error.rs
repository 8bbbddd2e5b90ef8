use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QifcatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read QIF file {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid category store {}: {source}", .path.display())]
    Store {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot access category store {}: {source}", .path.display())]
    StoreIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid amount on line {line}: {value:?}")]
    InvalidAmount { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, QifcatError>;
