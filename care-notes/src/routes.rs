//! Axum route handlers for the care notes API.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use care_notes_types::{CareNote, ServiceMessage};
use std::sync::Arc;

use crate::error::ValidationError;
use crate::store::NoteStore;
use crate::validation;

pub const RUNNING_MESSAGE: &str = "Care Notes API is running";

pub struct AppState {
    pub store: NoteStore,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}

// GET /
pub async fn root() -> Json<ServiceMessage> {
    Json(ServiceMessage {
        message: RUNNING_MESSAGE.to_string(),
    })
}

// GET /care-notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<CareNote>> {
    Json(state.store.list_all())
}

// POST /care-notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CareNote>, ValidationError> {
    let new_note = match validation::parse_new_note(&body) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("Rejected care note: {}", e);
            return Err(e);
        }
    };

    let note = state.store.insert(new_note);
    log::info!(
        "Created care note {} for {} ({} stored)",
        note.id,
        note.resident_name,
        state.store.len()
    );

    Ok(Json(note))
}
