//! Runtime state of the registration page.

use common::model::config::ClientConfig;
use common::registration::RegistrationForm;

use crate::supabase::SelectedFile;

pub struct RegistrationComponent {
    /// Typed values, picked files and the `loading` flag.
    pub form: RegistrationForm<SelectedFile>,

    /// Supabase settings; `None` until `/api/config` has answered, or when
    /// it failed.
    pub config: Option<ClientConfig>,

    /// Guard so the config is fetched on the first render only.
    pub loaded: bool,
}

impl RegistrationComponent {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::new(),
            config: None,
            loaded: false,
        }
    }
}

impl Default for RegistrationComponent {
    fn default() -> Self {
        Self::new()
    }
}
