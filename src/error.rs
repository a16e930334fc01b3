use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Todo not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("No recently deleted todos to restore")]
    NothingToUndo,

    #[error("local .todos directory already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
