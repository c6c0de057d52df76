//! This module stores the type for the collective state of the application.
use crate::notes::Note;

/// The shared state for the application.
///
/// Holds the note collection loaded at startup. The state is only ever
/// handed out behind an [`Arc`](std::sync::Arc) and exposes no mutation,
/// so request handlers need no locking.
#[derive(Debug)]
pub struct AppState {
    /// The full ordered collection served by the API.
    pub notes: Vec<Note>,
}

impl AppState {
    /// Creates a new [`AppState`] from a loaded collection.
    pub fn new(notes: Vec<Note>) -> Self {
        AppState { notes }
    }
}
