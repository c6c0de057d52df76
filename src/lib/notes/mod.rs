//! Module containing everything pertaining to the notes collection.
use thiserror::Error;

pub mod model;
pub mod routes;
pub mod store;

pub use model::Note;

/// An error type for all errors that may happen while loading the
/// backing file. Either case is fatal at startup: the server must not
/// begin serving requests without the collection loaded.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("failed to read the backing file")]
    BackingFile(#[from] std::io::Error),
    #[error("backing file is not valid JSON")]
    Malformed(#[from] serde_json::Error),
}
