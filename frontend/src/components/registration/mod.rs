//! Membership registration form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering
//! and DOM helpers.
//!
//! On first render the component fetches its Supabase settings from the
//! backend; submitting before they arrive shows the failure alert.

use common::model::config::ClientConfig;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistrationProps;
pub use state::RegistrationComponent;

impl Component for RegistrationComponent {
    type Message = Msg;
    type Properties = RegistrationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RegistrationComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let url = ctx.props().config_url.to_string();
            spawn_local(async move {
                let config = match Request::get(&url).send().await {
                    Ok(resp) if resp.ok() => resp.json::<ClientConfig>().await.ok(),
                    Ok(resp) => {
                        gloo_console::warn!(format!(
                            "config request failed with status {}",
                            resp.status()
                        ));
                        None
                    }
                    Err(err) => {
                        gloo_console::warn!(format!("config request failed: {}", err));
                        None
                    }
                };
                link.send_message(Msg::SetConfig(config));
            });
        }
    }
}
