//! Update function for the registration component.
//!
//! `Msg::Submit` runs the whole upload/insert pipeline in a local task and
//! reports the outcome with a blocking alert; `Msg::SubmitFinished` then
//! clears `loading` whatever happened.

use common::registration::notice;
use common::registration::{FormError, submit};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::supabase::{BrowserClock, SelectedFile, SupabaseClient};

use super::helpers::show_alert;
use super::messages::Msg;
use super::state::RegistrationComponent;

const CONFIG_MISSING: &str = "لم يتم تحميل إعدادات الاتصال بالخادم";

pub fn update(
    component: &mut RegistrationComponent,
    ctx: &Context<RegistrationComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(field, value) => match component.form.update_field(field, value) {
            Ok(()) => true,
            Err(err) => {
                gloo_console::warn!(err.to_string());
                false
            }
        },
        Msg::SelectFile(kind, file) => {
            component
                .form
                .select_file(kind, file.map(SelectedFile::from));
            true
        }
        Msg::Submit => {
            let Some(config) = component.config.clone() else {
                gloo_console::error!("submit without Supabase settings");
                show_alert(&notice::failure_message(CONFIG_MISSING));
                return false;
            };

            match component.form.begin_submit() {
                Ok(()) => {}
                Err(FormError::AlreadySubmitting) => return false,
                Err(err) => {
                    gloo_console::warn!(err.to_string());
                    show_alert(&notice::failure_message(notice::INCOMPLETE));
                    return false;
                }
            }

            let record = component.form.record.clone();
            let files = component.form.files.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let client = SupabaseClient::new(&config);
                match submit(&client, &BrowserClock, &config, &record, &files).await {
                    Ok(_) => show_alert(notice::SUCCESS),
                    Err(err) => {
                        gloo_console::error!(format!("registration failed: {:?}", err));
                        show_alert(&notice::failure(&err));
                    }
                }
                link.send_message(Msg::SubmitFinished);
            });
            true
        }
        Msg::SubmitFinished => {
            component.form.finish_submit();
            true
        }
        Msg::SetConfig(config) => {
            component.config = config;
            false
        }
    }
}
