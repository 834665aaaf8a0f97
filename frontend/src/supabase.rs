//! Browser client for the Supabase project behind the form.
//!
//! Implements `common::registration::Backend` with `gloo-net`: objects go to
//! the Storage API, rows to PostgREST. Both calls authenticate with the
//! public anon key from `ClientConfig`.

use common::model::attachment::AttachmentFile;
use common::model::config::ClientConfig;
use common::model::member::PersistedMember;
use common::registration::{Backend, BackendError, Clock};
use common::supabase::{error_message, object_url, table_url};
use gloo_net::http::{Request, RequestBuilder, Response};

/// A file picked through one of the form's file inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile(web_sys::File);

impl From<web_sys::File> for SelectedFile {
    fn from(file: web_sys::File) -> Self {
        Self(file)
    }
}

impl SelectedFile {
    fn content_type(&self) -> String {
        let mime = self.0.type_();
        if mime.is_empty() {
            "application/octet-stream".to_string()
        } else {
            mime
        }
    }
}

impl AttachmentFile for SelectedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

impl Backend for SupabaseClient {
    type File = SelectedFile;

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &SelectedFile,
    ) -> Result<String, BackendError> {
        let request = self
            .authorized(Request::post(&object_url(&self.base_url, bucket, path)))
            .header("Content-Type", &file.content_type())
            .header("x-upsert", "false")
            .body(file.0.clone())
            .map_err(|e| BackendError::new(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::new(e.to_string()))?;
        ensure_success(response).await?;

        Ok(path.to_string())
    }

    async fn insert(&self, table: &str, rows: &[PersistedMember]) -> Result<(), BackendError> {
        let request = self
            .authorized(Request::post(&table_url(&self.base_url, table)))
            .header("Prefer", "return=minimal")
            .json(&rows)
            .map_err(|e| BackendError::new(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::new(e.to_string()))?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: Response) -> Result<(), BackendError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(BackendError::with_status(status, error_message(&body)))
}
