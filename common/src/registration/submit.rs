use crate::model::attachment::{AttachmentFile, AttachmentKind, Attachments, storage_path};
use crate::model::config::ClientConfig;
use crate::model::member::{PersistedMember, RegistrationRecord};
use crate::registration::error::{BackendError, SubmitError};

/// Blob storage plus table insert, as exposed by the hosted backend.
///
/// Futures are not required to be `Send`: the browser client runs them on
/// the single wasm thread.
#[allow(async_fn_in_trait)]
pub trait Backend {
    type File: AttachmentFile;

    /// Stores `file` at `path` inside `bucket` and returns the stored path.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &Self::File,
    ) -> Result<String, BackendError>;

    async fn insert(&self, table: &str, rows: &[PersistedMember]) -> Result<(), BackendError>;
}

pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Uploads the personal photo, then the ID card, then inserts one member row
/// carrying both storage paths.
///
/// Every step waits for the previous one. The first failure ends the run:
/// later steps are never issued, and objects already uploaded stay where
/// they are.
pub async fn submit<B: Backend, C: Clock>(
    backend: &B,
    clock: &C,
    config: &ClientConfig,
    record: &RegistrationRecord,
    files: &Attachments<B::File>,
) -> Result<PersistedMember, SubmitError> {
    let photo_url = upload_attachment(
        backend,
        clock,
        &config.bucket,
        AttachmentKind::PersonalPhoto,
        files,
    )
    .await?;
    let id_card_url =
        upload_attachment(backend, clock, &config.bucket, AttachmentKind::IdCard, files).await?;

    let member = PersistedMember::new(
        record.clone(),
        photo_url,
        id_card_url,
        config.member_status,
    );
    backend
        .insert(&config.table, std::slice::from_ref(&member))
        .await
        .map_err(SubmitError::Insert)?;
    Ok(member)
}

/// Empty string when nothing is selected for `kind`.
async fn upload_attachment<B: Backend, C: Clock>(
    backend: &B,
    clock: &C,
    bucket: &str,
    kind: AttachmentKind,
    files: &Attachments<B::File>,
) -> Result<String, SubmitError> {
    let Some(file) = files.get(kind) else {
        return Ok(String::new());
    };
    let path = storage_path(kind, &file.file_name(), clock.now_millis());
    backend
        .upload(bucket, &path, file)
        .await
        .map_err(|source| SubmitError::Upload { kind, source })
}
