//! Pieces of the Supabase REST protocol that do not need a network stack:
//! endpoint URLs and the extraction of a readable message from an error
//! response. The browser client in `frontend::supabase` does the requests.

use serde_json::Value;

pub const STORAGE_OBJECT_PATH: &str = "/storage/v1/object";
pub const REST_PATH: &str = "/rest/v1";

/// Keys Storage, PostgREST and GoTrue use for the human-readable part of an
/// error body, most specific first.
const MESSAGE_KEYS: [&str; 4] = ["message", "error_description", "error", "msg"];

/// `POST` target for uploading `path` into `bucket`.
pub fn object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!(
        "{}{}/{}/{}",
        base_url.trim_end_matches('/'),
        STORAGE_OBJECT_PATH,
        bucket,
        path.trim_start_matches('/')
    )
}

/// `POST` target for inserting rows into `table`.
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), REST_PATH, table)
}

/// Pulls the message out of an error response body.
///
/// JSON bodies are searched for the first non-empty string under one of
/// `MESSAGE_KEYS`; anything else is returned trimmed as-is. An empty body
/// gives an empty message.
pub fn error_message(body: &str) -> String {
    let body = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        return MESSAGE_KEYS
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .find(|text| !text.trim().is_empty())
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
    }
    body.to_string()
}
