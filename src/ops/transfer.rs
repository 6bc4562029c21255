use std::fs;
use std::path::Path;

use crate::model::State;

/// Default file name for exports, written to the current directory.
pub const EXPORT_FILE_NAME: &str = "habits-export.json";

/// Error type for import/export
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document has no `habits` array")]
    MissingHabits,
}

/// Serialize the whole state for export. Same pretty layout the state file
/// uses, so exports can be re-imported or inspected by hand.
pub fn export_json(state: &State) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Write an export file. Overwrites an existing file at `path`.
pub fn export_to_file(state: &State, path: &Path) -> Result<(), TransferError> {
    let json = export_json(state)?;
    fs::write(path, json).map_err(|e| TransferError::WriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse an imported document into a full replacement state.
///
/// Validation is deliberately shallow: the document must be JSON and its
/// top-level `habits` must be an array. Habit entries only need the shape
/// the model requires (string id and name, map log); ids are taken
/// verbatim. Anything else fails the import and the caller keeps its
/// current state.
pub fn import_state(json: &str) -> Result<State, TransferError> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    match doc.get("habits") {
        Some(habits) if habits.is_array() => {}
        _ => return Err(TransferError::MissingHabits),
    }
    Ok(serde_json::from_value(doc)?)
}

/// Read and parse an import file.
pub fn import_from_file(path: &Path) -> Result<State, TransferError> {
    let json = fs::read_to_string(path).map_err(|e| TransferError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    import_state(&json)
}
