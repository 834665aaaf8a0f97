use crate::model::attachment::{AttachmentKind, Attachments};
use crate::model::member::{FormField, RegistrationRecord};
use crate::registration::error::FormError;

/// State behind the registration page.
///
/// `loading` is true from `begin_submit` until `finish_submit`; the view
/// disables the submit button from it, and `begin_submit` refuses to start
/// a second run while it is set.
#[derive(Debug, Clone)]
pub struct RegistrationForm<F> {
    pub record: RegistrationRecord,
    pub files: Attachments<F>,
    loading: bool,
}

impl<F> Default for RegistrationForm<F> {
    fn default() -> Self {
        Self {
            record: RegistrationRecord::default(),
            files: Attachments::default(),
            loading: false,
        }
    }
}

impl<F> RegistrationForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces one key of the record. Only the governorate is checked, since
    /// it has to be one of the listed options.
    pub fn update_field(&mut self, field: FormField, value: String) -> Result<(), FormError> {
        let record = &mut self.record;
        match field {
            FormField::FullName => record.full_name = value,
            FormField::NationalId => record.national_id = value,
            FormField::Email => record.email = value,
            FormField::Phone => record.phone = value,
            FormField::Governorate => record.governorate = value.parse()?,
            FormField::Qualification => record.qualification = value,
            FormField::Job => record.job = value,
        }
        Ok(())
    }

    pub fn select_file(&mut self, kind: AttachmentKind, file: Option<F>) {
        self.files.select(kind, file);
    }

    /// Names of the required inputs that would make the browser refuse the
    /// form: empty text fields, an email without `@`, missing files.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let record = &self.record;
        let mut missing = Vec::new();
        let text_fields = [
            (FormField::FullName, &record.full_name),
            (FormField::NationalId, &record.national_id),
            (FormField::Email, &record.email),
            (FormField::Phone, &record.phone),
        ];
        for (field, value) in text_fields {
            if value.is_empty() {
                missing.push(field.name());
            }
        }
        if !record.email.is_empty() && !record.email.contains('@') {
            missing.push(FormField::Email.name());
        }
        for kind in AttachmentKind::ALL {
            if self.files.get(kind).is_none() {
                missing.push(kind.input_name());
            }
        }
        missing
    }

    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        if self.loading {
            return Err(FormError::AlreadySubmitting);
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::Incomplete(missing));
        }
        self.loading = true;
        Ok(())
    }

    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::governorate::Governorate;

    fn filled() -> RegistrationForm<&'static str> {
        let mut form = RegistrationForm::new();
        form.update_field(FormField::FullName, "منى أحمد السيد علي".into())
            .unwrap();
        form.update_field(FormField::NationalId, "29905051234567".into())
            .unwrap();
        form.update_field(FormField::Email, "mona@example.com".into())
            .unwrap();
        form.update_field(FormField::Phone, "01123456789".into())
            .unwrap();
        form.select_file(AttachmentKind::PersonalPhoto, Some("me.jpg"));
        form.select_file(AttachmentKind::IdCard, Some("card.jpg"));
        form
    }

    #[test]
    fn update_field_replaces_only_that_key() {
        let mut form: RegistrationForm<&str> = RegistrationForm::new();
        form.update_field(FormField::Phone, "0100".into()).unwrap();
        form.update_field(FormField::Phone, "0111".into()).unwrap();
        assert_eq!(form.record.phone, "0111");
        assert!(form.record.full_name.is_empty());
        assert_eq!(form.record.governorate, Governorate::Cairo);
    }

    #[test]
    fn national_id_is_not_validated() {
        let mut form: RegistrationForm<&str> = RegistrationForm::new();
        form.update_field(FormField::NationalId, "12ab".into())
            .unwrap();
        assert_eq!(form.record.national_id, "12ab");
    }

    #[test]
    fn governorate_must_be_listed() {
        let mut form: RegistrationForm<&str> = RegistrationForm::new();
        form.update_field(FormField::Governorate, "الجيزة".into())
            .unwrap();
        assert_eq!(form.record.governorate, Governorate::Giza);

        let err = form
            .update_field(FormField::Governorate, "Paris".into())
            .unwrap_err();
        assert!(matches!(err, FormError::Governorate(_)));
        assert_eq!(form.record.governorate, Governorate::Giza);
    }

    #[test]
    fn empty_form_lists_every_required_input() {
        let form: RegistrationForm<&str> = RegistrationForm::new();
        assert_eq!(
            form.missing_required(),
            vec![
                "full_name",
                "national_id",
                "email",
                "phone",
                "personal_photo",
                "id_card"
            ]
        );
    }

    #[test]
    fn email_without_at_is_missing() {
        let mut form = filled();
        form.update_field(FormField::Email, "mona.example.com".into())
            .unwrap();
        assert_eq!(form.missing_required(), vec!["email"]);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.update_field(FormField::FullName, "   ".into())
            .unwrap();
        assert!(form.missing_required().is_empty());
        assert_eq!(form.begin_submit(), Ok(()));
        assert!(form.is_loading());
    }

    #[test]
    fn incomplete_form_never_enters_loading() {
        let mut form = filled();
        form.files.id_card = None;
        assert_eq!(
            form.begin_submit(),
            Err(FormError::Incomplete(vec!["id_card"]))
        );
        assert!(!form.is_loading());
    }

    #[test]
    fn second_submit_is_refused_while_loading() {
        let mut form = filled();
        assert_eq!(form.begin_submit(), Ok(()));
        assert!(form.is_loading());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));

        form.finish_submit();
        assert!(!form.is_loading());
        assert_eq!(form.begin_submit(), Ok(()));
    }
}
