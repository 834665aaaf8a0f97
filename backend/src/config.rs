//! Server settings read from the environment at startup.
//!
//! Bind address plus the Supabase settings handed to the page through
//! `GET /api/config`. Missing or unparsable values fall back to defaults
//! with a log line; only the Supabase URL and anon key have no default.

use common::model::config::{ClientConfig, DEFAULT_BUCKET, DEFAULT_TABLE};
use common::model::member::MemberStatus;
use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `SUPABASE_URL` or `SUPABASE_ANON_KEY` is missing.
    pub client: Option<ClientConfig>,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "PORT", 8080),
            client: load_client(&lookup),
        }
    }
}

fn load_client(lookup: &impl Fn(&str) -> Option<String>) -> Option<ClientConfig> {
    let url = non_empty(lookup, "SUPABASE_URL");
    let key = non_empty(lookup, "SUPABASE_ANON_KEY");
    let (Some(url), Some(key)) = (url, key) else {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, /api/config will answer 503");
        return None;
    };

    let mut client = ClientConfig::new(url, key);
    client.bucket = try_load(lookup, "MEMBER_FILES_BUCKET", DEFAULT_BUCKET.to_string());
    client.table = try_load(lookup, "MEMBERS_TABLE", DEFAULT_TABLE.to_string());
    client.member_status = load_member_status(lookup);
    Some(client)
}

/// `pending` (default) writes the status with each row, `none` leaves the
/// column to its database default.
fn load_member_status(lookup: &impl Fn(&str) -> Option<String>) -> Option<MemberStatus> {
    let Some(raw) = lookup("MEMBER_STATUS") else {
        return Some(MemberStatus::Pending);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "pending" => Some(MemberStatus::Pending),
        "none" | "" => None,
        other => {
            warn!("Invalid MEMBER_STATUS value: {other}, using default: pending");
            Some(MemberStatus::Pending)
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.client.is_none());
    }

    #[test]
    fn supabase_settings_with_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("PORT", "3000"),
        ]));
        assert_eq!(config.port, 3000);
        let client = config.client.unwrap();
        assert_eq!(client, ClientConfig::new("https://abc.supabase.co", "anon-key"));
    }

    #[test]
    fn overrides_and_status_none() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("MEMBER_FILES_BUCKET", "uploads"),
            ("MEMBERS_TABLE", "applicants"),
            ("MEMBER_STATUS", "none"),
        ]));
        let client = config.client.unwrap();
        assert_eq!(client.bucket, "uploads");
        assert_eq!(client.table, "applicants");
        assert_eq!(client.member_status, None);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon-key"),
            ("PORT", "eighty"),
            ("MEMBER_STATUS", "approved"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.client.unwrap().member_status, Some(MemberStatus::Pending));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "  "),
        ]));
        assert!(config.client.is_none());
    }
}
