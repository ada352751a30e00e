use serde::{Deserialize, Serialize};

/// A note as the notes API returns it.
///
/// `id` is assigned by the server. Notes appended locally after a successful
/// create carry a provisional id (see [`is_provisional_id`]) until the next
/// refresh replaces them with the server copy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    pub fn is_provisional(&self) -> bool {
        is_provisional_id(&self.id)
    }
}

/// POST `/notes` body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewNote {
    pub title: String,
    pub body: String,
}

/// Payload published on the note bus after a successful create.
///
/// Carries only what the user submitted, never the server id or timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteAdded {
    pub title: String,
    pub body: String,
}

impl From<NewNote> for NoteAdded {
    fn from(n: NewNote) -> Self {
        Self {
            title: n.title,
            body: n.body,
        }
    }
}

/// Every notes API response wraps its payload in `data`.
#[allow(dead_code)]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

pub(crate) const PROVISIONAL_ID_PREFIX: &str = "tmp-";

pub(crate) fn is_provisional_id(id: &str) -> bool {
    id.starts_with(PROVISIONAL_ID_PREFIX)
}
