use crate::model::member::MemberStatus;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUCKET: &str = "member-files";
pub const DEFAULT_TABLE: &str = "members";

/// Everything the page needs to talk to Supabase.
///
/// Served by the backend at `GET /api/config` and fetched by the form on its
/// first render. `anon_key` is the public key meant for browsers; access
/// rules live in the Supabase project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub supabase_url: String,
    pub anon_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_table")]
    pub table: String,
    /// Status written with each new row; `None` leaves the key out.
    #[serde(default = "default_member_status")]
    pub member_status: Option<MemberStatus>,
}

impl ClientConfig {
    pub fn new(supabase_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            anon_key: anon_key.into(),
            bucket: default_bucket(),
            table: default_table(),
            member_status: default_member_status(),
        }
    }
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_member_status() -> Option<MemberStatus> {
    Some(MemberStatus::Pending)
}
