use super::TodoStore;
use crate::error::{Result, TodozError};
use crate::model::StoreState;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the JSON document inside a `.todos` directory.
pub const DATA_FILENAME: &str = "todos.json";

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(store_dir: PathBuf) -> Self {
        Self {
            data_file: store_dir.join(DATA_FILENAME),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<StoreState> {
        if !self.data_file.exists() {
            return Ok(StoreState::default());
        }
        let content = fs::read_to_string(&self.data_file)?;
        let state: StoreState = serde_json::from_str(&content)?;
        Ok(state)
    }

    fn commit(&mut self, state: &StoreState) -> Result<()> {
        let dir = self.data_file.parent().ok_or_else(|| {
            TodozError::Store(format!(
                "store path has no parent directory: {}",
                self.data_file.display()
            ))
        })?;
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(state)?;

        // Write-then-rename so a crash mid-write never clobbers the document
        let tmp = self.data_file.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.data_file)?;
        Ok(())
    }
}
