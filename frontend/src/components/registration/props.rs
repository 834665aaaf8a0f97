//! Properties for the `RegistrationComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationProps {
    /// Where the Supabase settings are fetched from on first render. The
    /// backend serves them at `/api/config`.
    #[prop_or(AttrValue::Static("/api/config"))]
    pub config_url: AttrValue,
}
