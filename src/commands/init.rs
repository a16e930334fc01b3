use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use std::fs;
use std::path::Path;

const GITIGNORE_ENTRY: &str = "# Local todos\n.todos/\n";

/// Create a project-local `.todos` directory and keep it out of version
/// control.
pub fn run(cwd: &Path) -> Result<CmdResult> {
    let dir = cwd.join(".todos");
    if dir.exists() {
        return Err(TodozError::AlreadyInitialized(dir));
    }
    fs::create_dir_all(&dir)?;
    ensure_gitignore(cwd)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized local todo store in {}",
        dir.display()
    )));
    result.add_message(CmdMessage::info(
        "Local todos will now take precedence over global todos in this directory.",
    ));
    Ok(result)
}

/// Make sure `.gitignore` covers the `.todos` directory, creating or
/// appending as needed. An existing `.todos` or `.todos/` line is left alone.
fn ensure_gitignore(dir: &Path) -> Result<()> {
    let path = dir.join(".gitignore");
    if !path.exists() {
        fs::write(&path, GITIGNORE_ENTRY)?;
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let has_entry = content
        .lines()
        .map(str::trim)
        .any(|line| line == ".todos/" || line == ".todos");
    if has_entry {
        return Ok(());
    }

    let mut appended = content;
    if !appended.is_empty() && !appended.ends_with('\n') {
        appended.push('\n');
    }
    appended.push('\n');
    appended.push_str(GITIGNORE_ENTRY);
    fs::write(&path, appended)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_store_dir_and_gitignore() {
        let temp = TempDir::new().unwrap();
        run(temp.path()).unwrap();

        assert!(temp.path().join(".todos").is_dir());
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(gitignore.contains(".todos/"));
    }

    #[test]
    fn fails_when_store_dir_already_exists() {
        let temp = TempDir::new().unwrap();
        run(temp.path()).unwrap();

        let err = run(temp.path()).unwrap_err();
        assert!(matches!(err, TodozError::AlreadyInitialized(_)));
    }

    #[test]
    fn appends_to_existing_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "target/\n").unwrap();

        run(temp.path()).unwrap();
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(gitignore.starts_with("target/\n"));
        assert!(gitignore.contains(".todos/"));
    }

    #[test]
    fn appending_repairs_a_missing_trailing_newline() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "target/").unwrap();

        run(temp.path()).unwrap();
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(gitignore.contains("target/\n"));
        assert!(gitignore.contains(".todos/"));
    }

    #[test]
    fn leaves_gitignore_alone_when_entry_present() {
        let temp = TempDir::new().unwrap();
        let original = "node_modules/\n.todos/\n";
        fs::write(temp.path().join(".gitignore"), original).unwrap();

        run(temp.path()).unwrap();
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, original);
    }

    #[test]
    fn recognizes_the_bare_entry_form() {
        let temp = TempDir::new().unwrap();
        let original = ".todos\n";
        fs::write(temp.path().join(".gitignore"), original).unwrap();

        run(temp.path()).unwrap();
        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, original);
    }
}
