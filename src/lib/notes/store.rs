//! Loading of the static backing file.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{model::Note, NotesError};

/// The shape of the backing file: a top-level object whose `notes`
/// field holds the full collection.
#[derive(Deserialize, Debug)]
pub struct NotesFile {
    notes: Vec<Note>,
}

impl NotesFile {
    /// Reads and parses the backing file, returning the ordered notes.
    ///
    /// Called once from the server's main before the listening socket
    /// is opened. The collection is never reloaded or mutated after
    /// this point.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Note>, NotesError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let file: NotesFile = serde_json::from_str(&raw)?;

        debug!("loaded {} notes from {:?}", file.notes.len(), path.as_ref());

        Ok(file.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_backing_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        fs::write(&path, contents).unwrap();

        (dir, path)
    }

    #[test]
    fn test_load_returns_notes_in_file_order() {
        let (_dir, path) = write_backing_file(
            r#"{"notes": [{"id": 1, "content": "a"}, {"id": 2, "content": "b"}]}"#,
        );

        let notes = NotesFile::load(&path).expect("failed to load notes");

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].content, "a");
        assert_eq!(notes[1].id, 2);
        assert_eq!(notes[1].content, "b");
    }

    #[test]
    fn test_load_empty_collection() {
        let (_dir, path) = write_backing_file(r#"{"notes": []}"#);

        let notes = NotesFile::load(&path).expect("failed to load notes");

        assert!(notes.is_empty());
    }

    #[test]
    fn test_load_twice_is_deterministic() {
        let (_dir, path) = write_backing_file(
            r#"{"notes": [{"id": 1, "content": "a"}, {"id": 2, "content": "b"}]}"#,
        );

        let first = NotesFile::load(&path).expect("failed to load notes");
        let second = NotesFile::load(&path).expect("failed to load notes");

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let result = NotesFile::load(&path);

        assert!(matches!(result, Err(NotesError::BackingFile(_))));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let (_dir, path) = write_backing_file("this is not json");

        let result = NotesFile::load(&path);

        assert!(matches!(result, Err(NotesError::Malformed(_))));
    }

    #[test]
    fn test_load_missing_notes_field_fails() {
        let (_dir, path) = write_backing_file(r#"{"records": []}"#);

        let result = NotesFile::load(&path);

        assert!(matches!(result, Err(NotesError::Malformed(_))));
    }

    #[test]
    fn test_unknown_fields_pass_through_unchanged() {
        let (_dir, path) = write_backing_file(
            r#"{"notes": [{"id": 7, "content": "c", "important": true, "date": "2019-05-30"}]}"#,
        );

        let notes = NotesFile::load(&path).expect("failed to load notes");
        let serialized = serde_json::to_value(&notes).unwrap();

        assert_eq!(
            serialized,
            json!([{"id": 7, "content": "c", "important": true, "date": "2019-05-30"}])
        );
    }
}
