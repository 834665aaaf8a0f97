use common::model::attachment::AttachmentKind;
use common::model::config::ClientConfig;
use common::model::member::FormField;

pub enum Msg {
    UpdateField(FormField, String),
    /// `None` when the file dialog was cancelled.
    SelectFile(AttachmentKind, Option<web_sys::File>),
    Submit,
    SubmitFinished,
    SetConfig(Option<ClientConfig>),
}
