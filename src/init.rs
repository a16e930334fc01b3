use crate::api::TodozApi;
use crate::commands::StoreLocation;
use crate::error::{Result, TodozError};
use crate::store::fs::FileStore;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub struct AppContext {
    pub api: TodozApi<FileStore>,
    pub location: StoreLocation,
}

/// Resolve where this invocation's store lives: a project-local `.todos`
/// directory wins over the home fallback, and the choice is made exactly
/// once per process.
pub fn resolve_store_location(cwd: &Path) -> Result<StoreLocation> {
    let local = cwd.join(".todos");
    if local.is_dir() {
        return Ok(StoreLocation::Project(local));
    }
    Ok(StoreLocation::Home(home_store_dir()?))
}

/// The home fallback directory.
///
/// `TODOZ_HOME` substitutes the home directory itself (primarily for
/// testing); otherwise the OS home is detected via the `directories` crate.
fn home_store_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("TODOZ_HOME") {
        return Ok(PathBuf::from(home).join(".todos"));
    }
    let base = BaseDirs::new()
        .ok_or_else(|| TodozError::Store("could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(".todos"))
}

pub fn initialize(cwd: &Path) -> Result<AppContext> {
    let location = resolve_store_location(cwd)?;
    let store = FileStore::new(location.dir().to_path_buf());
    Ok(AppContext {
        api: TodozApi::new(store),
        location,
    })
}
