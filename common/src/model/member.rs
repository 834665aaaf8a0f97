use crate::model::governorate::Governorate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Soft length hint for the national ID input (`maxlength`). Egyptian IDs are
/// 14 digits but nothing checks the content.
pub const NATIONAL_ID_MAX_LEN: usize = 14;

/// What the user typed into the form, held in page memory until submit.
///
/// `qualification` and `job` belong to the stored row but have no input on
/// the page, so they stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrationRecord {
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub governorate: Governorate,
    pub qualification: String,
    pub job: String,
}

/// Keys of `RegistrationRecord`, named after the inputs' `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    NationalId,
    Email,
    Phone,
    Governorate,
    Qualification,
    Job,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::NationalId => "national_id",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Governorate => "governorate",
            FormField::Qualification => "qualification",
            FormField::Job => "job",
        }
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "full_name" => FormField::FullName,
            "national_id" => FormField::NationalId,
            "email" => FormField::Email,
            "phone" => FormField::Phone,
            "governorate" => FormField::Governorate,
            "qualification" => FormField::Qualification,
            "job" => FormField::Job,
            other => return Err(UnknownField(other.to_string())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
}

/// Row inserted into the members table once both uploads are done.
///
/// `status` is left out of the JSON when `None`, letting the table's column
/// default decide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedMember {
    #[serde(flatten)]
    pub record: RegistrationRecord,
    pub photo_url: String,
    pub id_card_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

impl PersistedMember {
    pub fn new(
        record: RegistrationRecord,
        photo_url: String,
        id_card_url: String,
        status: Option<MemberStatus>,
    ) -> Self {
        Self {
            record,
            photo_url,
            id_card_url,
            status,
        }
    }
}
