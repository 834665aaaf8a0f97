//! Registration flow: form state, the submit pipeline that uploads the two
//! attachments and inserts the member row, and the texts shown to the user
//! afterwards.

pub mod error;
pub mod form;
pub mod notice;
pub mod submit;

pub use error::{BackendError, FormError, SubmitError};
pub use form::RegistrationForm;
pub use submit::{Backend, Clock, submit};
