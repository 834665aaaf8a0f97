/// The two images a member must attach to the registration.
///
/// Each kind maps to the `name` of its `<input type="file">`, a folder in the
/// storage bucket, and a filename prefix. Uploaded objects end up at
/// `<folder><prefix><millis>.<ext>`, e.g. `personal/photo_1767225600000.jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    PersonalPhoto,
    IdCard,
}

impl AttachmentKind {
    /// Upload order used by the submit pipeline.
    pub const ALL: [AttachmentKind; 2] = [AttachmentKind::PersonalPhoto, AttachmentKind::IdCard];

    pub fn input_name(self) -> &'static str {
        match self {
            AttachmentKind::PersonalPhoto => "personal_photo",
            AttachmentKind::IdCard => "id_card",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        AttachmentKind::ALL
            .into_iter()
            .find(|kind| kind.input_name() == name)
    }

    pub fn folder(self) -> &'static str {
        match self {
            AttachmentKind::PersonalPhoto => "personal/",
            AttachmentKind::IdCard => "ids/",
        }
    }

    pub fn filename_prefix(self) -> &'static str {
        match self {
            AttachmentKind::PersonalPhoto => "photo_",
            AttachmentKind::IdCard => "id_",
        }
    }
}

/// A file the user picked in the browser. Only the name matters for naming
/// the stored object; reading the bytes is the backend's business.
pub trait AttachmentFile {
    fn file_name(&self) -> String;
}

/// Current file selection, one slot per `AttachmentKind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachments<F> {
    pub personal_photo: Option<F>,
    pub id_card: Option<F>,
}

impl<F> Default for Attachments<F> {
    fn default() -> Self {
        Self {
            personal_photo: None,
            id_card: None,
        }
    }
}

impl<F> Attachments<F> {
    pub fn get(&self, kind: AttachmentKind) -> Option<&F> {
        match kind {
            AttachmentKind::PersonalPhoto => self.personal_photo.as_ref(),
            AttachmentKind::IdCard => self.id_card.as_ref(),
        }
    }

    /// Stores `file` in the slot for `kind`.
    ///
    /// A cancelled file dialog reports no file at all; in that case the
    /// previous selection is kept.
    pub fn select(&mut self, kind: AttachmentKind, file: Option<F>) {
        let Some(file) = file else {
            return;
        };
        match kind {
            AttachmentKind::PersonalPhoto => self.personal_photo = Some(file),
            AttachmentKind::IdCard => self.id_card = Some(file),
        }
    }
}

/// Text after the last `.` of `name`. A name without any `.` is returned
/// whole.
pub fn file_extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

pub fn storage_filename(kind: AttachmentKind, original_name: &str, millis: u64) -> String {
    format!(
        "{}{}.{}",
        kind.filename_prefix(),
        millis,
        file_extension(original_name)
    )
}

/// Object key inside the bucket: folder plus `storage_filename`.
pub fn storage_path(kind: AttachmentKind, original_name: &str, millis: u64) -> String {
    format!(
        "{}{}",
        kind.folder(),
        storage_filename(kind, original_name, millis)
    )
}
