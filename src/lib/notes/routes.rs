//! This module includes all routes used for serving notes.
use std::sync::Arc;

use axum::{Extension, Json};
use tracing::{debug, instrument};

use super::model::Note;
use crate::state::AppState;

/// Returns the entire notes collection.
///
/// The collection is loaded once at startup and never changes, so every
/// request observes the identical sequence of notes.
#[instrument(skip(state))]
pub async fn list_notes(Extension(state): Extension<Arc<AppState>>) -> Json<Vec<Note>> {
    debug!("serving {} notes", state.notes.len());

    Json(state.notes.clone())
}
