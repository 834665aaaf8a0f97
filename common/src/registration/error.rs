use crate::model::attachment::AttachmentKind;
use crate::model::governorate::UnknownGovernorate;
use thiserror::Error;

/// A rejected call to the storage or table API.
///
/// `message` is the human-readable text pulled from the response body; it
/// may be empty when the service gave nothing useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    pub status: Option<u16>,
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Why a submission stopped. Both variants display as the backend's message
/// so the user sees the same kind of alert whatever failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{source}")]
    Upload {
        kind: AttachmentKind,
        source: BackendError,
    },
    #[error("{0}")]
    Insert(#[source] BackendError),
}

impl SubmitError {
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Upload { source, .. } => &source.message,
            SubmitError::Insert(source) => &source.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("missing required inputs: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
    #[error(transparent)]
    Governorate(#[from] UnknownGovernorate),
}
