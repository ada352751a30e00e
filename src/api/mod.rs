use crate::models::{ApiEnvelope, NewNote, Note};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const DEFAULT_API_URL: &str = "https://notes-api.dicoding.dev/v2";

/// Remote failure, by where it happened.
///
/// Every variant ends up as the same generic acknowledgment in the UI; the
/// split only matters for logs and tests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{context} ({status}): {body}")]
    Http {
        context: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("note data is null")]
    NotFound,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }

    fn http(status: reqwest::StatusCode, body: String, context: &'static str) -> Self {
        Self::Http {
            context,
            status: status.as_u16(),
            body,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // Deployments may inject `window.ENV = { API_URL }` before the wasm
        // bundle loads. `api_url` is accepted too.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                if !url_str.trim().is_empty() {
                                    return Self {
                                        api_url: normalize_base_url(&url_str),
                                    };
                                }
                            }
                        }
                    }
                }
            }
        }

        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Thin client over the notes REST API.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&EnvConfig::new().api_url)
    }

    pub(crate) fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    pub(crate) fn archived_notes_url(&self) -> String {
        format!("{}/notes/archived", self.base_url)
    }

    pub(crate) fn note_url(&self, note_id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(note_id))
    }

    async fn send(
        req: reqwest::RequestBuilder,
        context: &'static str,
    ) -> ApiResult<serde_json::Value> {
        let res = req.send().await.map_err(ApiError::network)?;

        let status = res.status();
        if status.is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, context))
        }
    }

    pub(crate) fn decode_note_list(data: serde_json::Value) -> ApiResult<Vec<Note>> {
        serde_json::from_value::<ApiEnvelope<Vec<Note>>>(data)
            .map(|env| env.data)
            .map_err(ApiError::parse)
    }

    /// `{ data: null }` is how the API reports an unknown id.
    pub(crate) fn decode_single_note(data: serde_json::Value) -> ApiResult<Note> {
        serde_json::from_value::<ApiEnvelope<Option<Note>>>(data)
            .map_err(ApiError::parse)?
            .data
            .ok_or(ApiError::NotFound)
    }

    /// A create only has to answer with JSON; the note inside is informational.
    pub(crate) fn decode_created_note(data: serde_json::Value) -> Option<Note> {
        serde_json::from_value::<ApiEnvelope<Note>>(data)
            .ok()
            .map(|env| env.data)
    }

    pub async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let client = reqwest::Client::new();
        let data = Self::send(client.get(self.notes_url()), "Failed to fetch notes").await?;
        Self::decode_note_list(data)
    }

    pub async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        let client = reqwest::Client::new();
        let data = Self::send(
            client.get(self.archived_notes_url()),
            "Failed to fetch archived notes",
        )
        .await?;
        Self::decode_note_list(data)
    }

    pub async fn get_note(&self, note_id: &str) -> ApiResult<Note> {
        let client = reqwest::Client::new();
        let data = Self::send(
            client.get(self.note_url(note_id)),
            "Failed to fetch single note",
        )
        .await?;
        Self::decode_single_note(data)
    }

    pub async fn create_note(&self, note: &NewNote) -> ApiResult<Option<Note>> {
        let client = reqwest::Client::new();
        let data = Self::send(
            client.post(self.notes_url()).json(note),
            "Failed to create note",
        )
        .await?;
        Ok(Self::decode_created_note(data))
    }

    pub async fn delete_note(&self, note_id: &str) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let data = Self::send(
            client.delete(self.note_url(note_id)),
            "Failed to delete note",
        )
        .await?;
        log::debug!("delete response for {note_id}: {data}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = ApiClient::new("https://notes-api.dicoding.dev/v2/");
        assert_eq!(client.base_url, "https://notes-api.dicoding.dev/v2");
    }

    #[test]
    fn test_note_urls() {
        let client = ApiClient::new(DEFAULT_API_URL);
        assert_eq!(client.notes_url(), "https://notes-api.dicoding.dev/v2/notes");
        assert_eq!(
            client.archived_notes_url(),
            "https://notes-api.dicoding.dev/v2/notes/archived"
        );
        assert_eq!(
            client.note_url("1"),
            "https://notes-api.dicoding.dev/v2/notes/1"
        );
    }

    #[test]
    fn test_note_url_encodes_id() {
        let client = ApiClient::new("http://localhost:9000");
        assert_eq!(client.note_url("a/b c"), "http://localhost:9000/notes/a%2Fb%20c");
    }

    #[test]
    fn test_decode_note_list_contract() {
        let data = serde_json::json!({
            "status": "success",
            "message": "Notes retrieved",
            "data": [
                {"id": "1", "title": "A", "body": "b", "createdAt": "t", "archived": false},
                {"id": "2", "title": "B", "body": "c", "createdAt": "t2", "archived": true}
            ]
        });
        let notes = ApiClient::decode_note_list(data).expect("list should decode");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "A");
        assert!(notes[1].archived);
    }

    #[test]
    fn test_decode_note_list_rejects_missing_data() {
        let err = ApiClient::decode_note_list(serde_json::json!({"status": "fail"}))
            .expect_err("missing data should fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_decode_single_note_null_is_not_found() {
        let err = ApiClient::decode_single_note(serde_json::json!({"data": null}))
            .expect_err("null data should fail");
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn test_decode_single_note() {
        let note = ApiClient::decode_single_note(serde_json::json!({
            "data": {"id": "9", "title": "T", "body": "B", "createdAt": "c", "archived": false}
        }))
        .expect("note should decode");
        assert_eq!(note.id, "9");
    }

    #[test]
    fn test_decode_created_note_is_lenient() {
        assert!(ApiClient::decode_created_note(serde_json::json!({"ok": true})).is_none());
        let created = ApiClient::decode_created_note(serde_json::json!({
            "status": "success",
            "data": {"id": "n1", "title": "T", "body": "B", "createdAt": "c", "archived": false}
        }))
        .expect("created note should decode");
        assert_eq!(created.id, "n1");
    }

    #[test]
    fn test_http_error_display_includes_context_and_status() {
        let e = ApiError::http(
            reqwest::StatusCode::NOT_FOUND,
            "{\"status\":\"fail\"}".to_string(),
            "Failed to delete note",
        );
        assert_eq!(e.to_string(), "Failed to delete note (404): {\"status\":\"fail\"}");
    }
}
