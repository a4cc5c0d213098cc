//! NoteStore — in-memory care note storage
//!
//! Holds every note for the lifetime of the process behind a single mutex.
//! Records are keyed by id and kept in insertion order.

use care_notes_types::{CareNote, NewCareNote};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    notes: Vec<CareNote>,
    /// id -> position in `notes`
    index: HashMap<Uuid, usize>,
    last_stamp: Option<DateTime<Utc>>,
}

/// Authoritative in-memory set of care notes.
#[derive(Default)]
pub struct NoteStore {
    inner: Mutex<Inner>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new note, assigning a fresh id and the current UTC time.
    ///
    /// Id generation, timestamping and insertion share one critical section,
    /// so concurrent callers never see the same id and readers never see a
    /// half-built record. Timestamps never go backwards even if the wall
    /// clock does.
    pub fn insert(&self, new_note: NewCareNote) -> CareNote {
        let mut inner = self.inner.lock();

        let mut id = Uuid::new_v4();
        while inner.index.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let now = Utc::now();
        let date_time = match inner.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        inner.last_stamp = Some(date_time);

        let note = CareNote {
            id,
            resident_name: new_note.resident_name,
            date_time,
            content: new_note.content,
            author_name: new_note.author_name,
        };

        let position = inner.notes.len();
        inner.notes.push(note.clone());
        inner.index.insert(id, position);

        note
    }

    /// Every stored note, oldest first.
    pub fn list_all(&self) -> Vec<CareNote> {
        self.inner.lock().notes.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
