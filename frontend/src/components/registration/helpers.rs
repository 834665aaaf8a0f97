//! DOM glue for the registration component: turning input events into
//! messages and showing the blocking alert.

use common::model::attachment::AttachmentKind;
use common::model::member::FormField;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};

use super::messages::Msg;

/// Text and select inputs. The record key comes from the element's `name`
/// attribute, so one handler serves every field.
pub fn field_change(e: &Event) -> Option<Msg> {
    let target = e.target()?;
    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else {
        return None;
    };

    match name.parse::<FormField>() {
        Ok(field) => Some(Msg::UpdateField(field, value)),
        Err(err) => {
            gloo_console::warn!(err.to_string());
            None
        }
    }
}

/// File inputs. Reports `None` as the file when the dialog was cancelled;
/// the form keeps its previous selection in that case.
pub fn file_change(e: &Event) -> Option<Msg> {
    let input = e.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let kind = AttachmentKind::from_input_name(&input.name())?;
    let file = input.files().and_then(|files| files.get(0));
    Some(Msg::SelectFile(kind, file))
}

pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
