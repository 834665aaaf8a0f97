//! # Client Configuration Service
//!
//! Hands the registration page the Supabase settings it needs to upload the
//! attachments and insert the member row.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/config`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the `ClientConfig` built from the environment
//!       at startup, or `503 Service Unavailable` when the Supabase URL or anon
//!       key was not provided.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/config";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
