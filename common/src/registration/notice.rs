//! Texts for the blocking alert shown once a submission ends.

use crate::registration::error::SubmitError;

pub const SUCCESS: &str = "تم التسجيل بنجاح! سيتم التواصل معكم قريباً.";

const FAILURE_PREFIX: &str = "حدث خطأ: ";

/// Shown instead of the error text when the backend sent none.
pub const FALLBACK_HINT: &str = "تأكد من إعدادات Storage في Supabase";

/// Shown when the form is submitted with a required input left empty.
pub const INCOMPLETE: &str = "يرجى استكمال جميع البيانات والمرفقات المطلوبة";

pub fn failure_message(message: &str) -> String {
    if message.is_empty() {
        format!("{FAILURE_PREFIX}{FALLBACK_HINT}")
    } else {
        format!("{FAILURE_PREFIX}{message}")
    }
}

pub fn failure(err: &SubmitError) -> String {
    failure_message(err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attachment::AttachmentKind;
    use crate::registration::error::BackendError;

    #[test]
    fn upload_and_insert_failures_look_the_same() {
        let upload = SubmitError::Upload {
            kind: AttachmentKind::IdCard,
            source: BackendError::new("Bucket not found"),
        };
        let insert = SubmitError::Insert(BackendError::new("Bucket not found"));
        assert_eq!(failure(&upload), failure(&insert));
        assert_eq!(failure(&upload), "حدث خطأ: Bucket not found");
    }

    #[test]
    fn empty_message_falls_back_to_hint() {
        let err = SubmitError::Insert(BackendError::with_status(500, ""));
        assert_eq!(failure(&err), "حدث خطأ: تأكد من إعدادات Storage في Supabase");
    }

    #[test]
    fn incomplete_form_gets_its_own_alert() {
        assert_eq!(
            failure_message(INCOMPLETE),
            "حدث خطأ: يرجى استكمال جميع البيانات والمرفقات المطلوبة"
        );
    }

    #[test]
    fn blank_message_is_shown_as_is() {
        assert_eq!(failure_message(" "), "حدث خطأ:  ");
    }
}
