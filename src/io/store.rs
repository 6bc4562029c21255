use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::model::State;

/// File name of the persisted state inside the data directory.
pub const STATE_FILE: &str = "state.json";

/// Error type for state persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolve the data directory: explicit override, then `TALLY_DIR`,
/// then `~/.tally`.
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var("TALLY_DIR") {
        return PathBuf::from(dir);
    }
    dirs_home().join(".tally")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Path of the state file inside the data directory.
pub fn state_path(dir: &Path) -> PathBuf {
    dir.join(STATE_FILE)
}

/// Read the state file. Returns `None` when the file is missing,
/// unreadable, or not valid JSON; callers fall back to the empty state,
/// so a corrupt file behaves like a first launch. The cause is traced at
/// debug level for postmortems.
pub fn read_state(dir: &Path) -> Option<State> {
    let path = state_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "state file unreadable, starting empty");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "state file unparseable, starting empty");
            None
        }
    }
}

/// Read the state file, falling back to the empty state.
pub fn load_or_default(dir: &Path) -> State {
    read_state(dir).unwrap_or_default()
}

/// Write the whole state atomically: temp file in the same directory,
/// flush, then rename over `state.json`. Creates the data directory on
/// first write.
pub fn write_state(dir: &Path, state: &State) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(state)?;
    fs::create_dir_all(dir).map_err(|e| StoreError::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let path = state_path(dir);
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::WriteError {
        path,
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
