use crate::model::Item;
use crate::store::fs::DATA_FILENAME;
use std::path::{Path, PathBuf};

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod move_item;
pub mod status;
pub mod toggle;
pub mod undo;
pub mod update;

/// Where the store for this invocation lives. Resolved once per process,
/// never re-evaluated mid-session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Project-local `.todos` directory under the working directory.
    Project(PathBuf),
    /// Fallback `.todos` directory under the user's home.
    Home(PathBuf),
}

impl StoreLocation {
    pub fn dir(&self) -> &Path {
        match self {
            StoreLocation::Project(dir) | StoreLocation::Home(dir) => dir,
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir().join(DATA_FILENAME)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result returned by every command.
///
/// `items` carries the ordered listing for read commands and the affected
/// item(s) for mutations; `messages` carries human-readable outcomes for the
/// CLI layer to print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<Item>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}
