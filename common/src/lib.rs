//! Types and logic shared by the registration page (`frontend`) and the
//! server that hosts it (`backend`).
//!
//! - `model`: the registration record, the governorate list, attachments,
//!   the row persisted in Supabase and the client configuration.
//! - `registration`: form state, the submit pipeline and user notices.
//! - `supabase`: URL and error-body helpers for the Supabase REST APIs.

pub mod model;
pub mod registration;
pub mod supabase;
